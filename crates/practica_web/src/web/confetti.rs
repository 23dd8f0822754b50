//! Celebration overlay: a fire-and-forget confetti burst.
//!
//! An explicitly owned effect handle, one per session: `trigger(duration_ms)`
//! starts a requestAnimationFrame loop on the overlay canvas that
//! self-terminates after the duration; `cancel` tears it down early. The rest
//! of the app never queries its internal state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use web_time::{Duration, Instant};

const PALETTE: [&str; 6] = [
    "#7aa2ff", "#fbbf24", "#4ade80", "#fb7185", "#a78bfa", "#e879f9",
];
const PARTICLE_COUNT: usize = 140;
const GRAVITY: f64 = 0.11;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    color: &'static str,
}

struct Burst {
    particles: Vec<Particle>,
    deadline: Instant,
}

struct Inner {
    canvas_id: &'static str,
    raf_id: Option<i32>,
    burst: Option<Burst>,
    rng: u64,
}

pub(super) struct Celebration {
    inner: Rc<RefCell<Inner>>,
}

impl Celebration {
    pub(super) fn new(canvas_id: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                canvas_id,
                raf_id: None,
                burst: None,
                rng: 0x5EED_C0DEu64,
            })),
        }
    }

    /// Start (or restart) a burst that ends itself after `duration_ms`.
    pub(super) fn trigger(&self, duration_ms: u32) {
        let mut inner = self.inner.borrow_mut();
        let Some(canvas) = lookup_canvas(inner.canvas_id) else {
            web_sys::console::warn_1(&"celebration canvas missing".into());
            return;
        };
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;

        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for i in 0..PARTICLE_COUNT {
            let rx = next_f64(&mut inner.rng);
            let ry = next_f64(&mut inner.rng);
            let rv = next_f64(&mut inner.rng);
            particles.push(Particle {
                x: rx * w,
                y: -10.0 - ry * h * 0.25,
                vx: (rv - 0.5) * 3.0,
                vy: 1.0 + rv * 2.5,
                size: 3.0 + rx * 4.0,
                color: PALETTE[i % PALETTE.len()],
            });
        }
        inner.burst = Some(Burst {
            particles,
            deadline: Instant::now() + Duration::from_millis(u64::from(duration_ms)),
        });

        let needs_schedule = inner.raf_id.is_none();
        drop(inner);
        if needs_schedule {
            schedule(Rc::clone(&self.inner));
        }
    }

    /// Stop any in-flight burst and clear the overlay.
    pub(super) fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(id) = inner.raf_id.take() {
            if let Some(w) = web_sys::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        inner.burst = None;
        if let Some(canvas) = lookup_canvas(inner.canvas_id) {
            clear(&canvas);
        }
    }
}

fn schedule(inner: Rc<RefCell<Inner>>) {
    let cell = Rc::clone(&inner);
    let cb = Closure::once_into_js(move || frame(cell));
    if let Some(w) = web_sys::window() {
        match w.request_animation_frame(cb.unchecked_ref()) {
            Ok(id) => inner.borrow_mut().raf_id = Some(id),
            Err(_) => inner.borrow_mut().raf_id = None,
        }
    }
}

fn frame(inner: Rc<RefCell<Inner>>) {
    let keep_going = {
        let mut g = inner.borrow_mut();
        g.raf_id = None;
        let Some(canvas) = lookup_canvas(g.canvas_id) else {
            g.burst = None;
            return;
        };
        match g.burst.as_mut() {
            Some(burst) if Instant::now() < burst.deadline => {
                let h = canvas.height() as f64;
                for p in &mut burst.particles {
                    p.vy += GRAVITY;
                    p.x += p.vx;
                    p.y += p.vy;
                    if p.y > h + 20.0 {
                        // Recycle from the top while the burst is live.
                        p.y = -10.0;
                        p.vy = 1.0;
                    }
                }
                draw(&canvas, &burst.particles);
                true
            }
            _ => {
                g.burst = None;
                clear(&canvas);
                false
            }
        }
    };

    if keep_going {
        schedule(inner);
    }
}

fn lookup_canvas(id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw(canvas: &HtmlCanvasElement, particles: &[Particle]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in particles {
        ctx.set_fill_style_str(p.color);
        ctx.fill_rect(p.x, p.y, p.size, p.size);
    }
}

fn clear(canvas: &HtmlCanvasElement) {
    if let Some(ctx) = context_2d(canvas) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

fn next_f64(seed: &mut u64) -> f64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*seed >> 40) as u32) as f64 / (1u32 << 24) as f64
}
