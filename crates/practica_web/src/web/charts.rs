//! Canvas-based charting for the learning-curve labs.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::float_fmt::fmt_f64_fixed;

const BG_COLOR: &str = "#10141f";
const GRID_COLOR: &str = "rgba(122, 162, 255, 0.15)";
const AXIS_COLOR: &str = "rgba(255, 255, 255, 0.55)";
const CURVE_COLOR: &str = "#7aa2ff";
const MARKER_COLOR: &str = "#fbbf24";

const MARGIN_LEFT: f64 = 38.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 24.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "get_context failed")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "cast failed".to_string())
}

/// Draw a success-probability curve.
///
/// Fixed 0..1 y-range with quarter gridlines, the `(practice, probability)`
/// polyline, and an optional marker dot at the current practice count. Purely
/// a rendering sink; the caller produces the points.
pub(super) fn draw_curve_chart(
    canvas: &HtmlCanvasElement,
    points: &[(u32, f64)],
    marker: Option<u32>,
) -> Result<(), String> {
    let ctx = context_2d(canvas)?;
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;

    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    let plot_w = (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

    let y_of = |p: f64| MARGIN_TOP + (1.0 - p.clamp(0.0, 1.0)) * plot_h;
    let max_t = points.last().map(|&(t, _)| t).unwrap_or(0).max(1) as f64;
    let x_of = |t: u32| MARGIN_LEFT + (t as f64 / max_t) * plot_w;

    // Horizontal gridlines with probability labels.
    ctx.set_font("11px ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto");
    for i in 0..=4 {
        let p = i as f64 * 0.25;
        let y = y_of(p);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(0.5);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(w - MARGIN_RIGHT, y);
        ctx.stroke();

        ctx.set_fill_style_str(AXIS_COLOR);
        let _ = ctx.fill_text(&fmt_f64_fixed(p, 2), 4.0, y + 4.0);
    }

    // X axis label.
    ctx.set_fill_style_str(AXIS_COLOR);
    let _ = ctx.fill_text("practice opportunities (T)", MARGIN_LEFT, h - 7.0);

    if points.is_empty() {
        return Ok(());
    }

    ctx.set_stroke_style_str(CURVE_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &(t, p)) in points.iter().enumerate() {
        let x = x_of(t);
        let y = y_of(p);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    if let Some(marker_t) = marker {
        if let Some(&(t, p)) = points.iter().find(|&&(t, _)| t == marker_t) {
            ctx.set_fill_style_str(MARKER_COLOR);
            ctx.begin_path();
            let _ = ctx.arc(x_of(t), y_of(p), 5.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    Ok(())
}
