//! The Practica app shell (wasm only).
//!
//! Ownership layout: `App` owns one [`NavState`], one [`SharedAnswers`], the
//! celebration handle, and the input-shortcut handle for the whole session.
//! Slides receive signals and callbacks; nothing reaches for globals.

mod charts;
mod confetti;
mod float_fmt;
mod formula_helper;
mod input;
mod markdown;
mod params;
mod scrollfx;
mod shell;
mod slides;
mod ticker;

use leptos::prelude::*;

use practica::answers::SharedAnswers;
use practica::deck::{self, SlideKind};
use practica::nav::NavState;

use confetti::Celebration;
use formula_helper::FormulaHelper;
use shell::{NavMenu, Topbar};
use slides::{SlideBody, SlideCtx};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Run a navigation op, then fire the scroll transition strictly after the
/// state mutation it belongs to.
fn navigate(nav: RwSignal<NavState>, op: impl FnOnce(&mut NavState) -> bool) {
    let mut moved = false;
    nav.update(|n| moved = op(n));
    if moved {
        scrollfx::scroll_to_slide(nav.with_untracked(|n| n.current()));
    }
}

#[component]
fn App() -> impl IntoView {
    let nav = RwSignal::new(NavState::new());
    let answers = RwSignal::new(SharedAnswers::new());

    // Slides request a celebration by bumping a counter; the effect below is
    // the only code that touches the canvas handle. Keeps slide code free of
    // browser types.
    let celebrate_ticks = RwSignal::new(0u32);

    let go_to = Callback::new(move |target: isize| navigate(nav, |n| n.go_to(target)));
    let celebrate = Callback::new(move |()| celebrate_ticks.update(|c| *c += 1));

    let celebration = StoredValue::new_local(Celebration::new("celebration-canvas"));
    Effect::new(move |_| {
        if celebrate_ticks.get() > 0 {
            celebration.with_value(|c| c.trigger(4_000));
        }
    });
    on_cleanup(move || celebration.with_value(|c| c.cancel()));

    // Document-level keyboard / pointer shortcuts. Held by an explicit
    // handle so the listeners come down with the session.
    let bindings = input::Bindings {
        on_forward: Callback::new(move |()| navigate(nav, NavState::step_forward)),
        on_backward: Callback::new(move |()| navigate(nav, NavState::step_backward)),
        on_toggle_menu: Callback::new(move |()| nav.update(NavState::toggle_menu)),
    };
    let input_handle = StoredValue::new_local(match input::install(bindings) {
        Ok(h) => Some(h),
        Err(e) => {
            web_sys::console::warn_1(&format!("input shortcuts unavailable: {e}").into());
            None
        }
    });
    on_cleanup(move || {
        input_handle.update_value(|h| {
            if let Some(h) = h.take() {
                h.remove();
            }
        })
    });

    let ctx = SlideCtx {
        nav,
        answers,
        go_to,
        celebrate,
    };

    view! {
        <Topbar nav=nav />
        <NavMenu nav=nav go_to=go_to />

        <main class="deck">
            <For
                each=move || {
                    let max = nav.with(|n| n.max_visited());
                    (0..=max).collect::<Vec<_>>()
                }
                key=|i| *i
                children=move |i| {
                    let kind = deck::kind_of(i).expect("revealed indices are always in the deck");
                    view! { <Slide index=i kind=kind nav=nav ctx=ctx /> }
                }
            />
        </main>

        <FormulaHelper nav=nav />
        <canvas id="celebration-canvas" class="celebration-canvas"></canvas>
    }
}

#[component]
fn Slide(
    index: usize,
    kind: SlideKind,
    nav: RwSignal<NavState>,
    ctx: SlideCtx,
) -> impl IntoView {
    view! {
        <section
            id=format!("slide-{}", kind.label())
            class=move || {
                if nav.with(|n| n.current()) == index {
                    "slide active"
                } else {
                    "slide"
                }
            }
        >
            <h2 class="slide-title">{kind.title()}</h2>
            <SlideBody kind=kind ctx=ctx />
        </section>
    }
}
