//! Smooth scroll/transition to a slide container.

use practica::deck;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Scroll the viewport to the container of `index`.
///
/// Invoked strictly after a successful navigation. The container may not be
/// mounted yet when the navigation just unlocked it, so a miss retries once
/// on the next animation frame before degrading to a console warning;
/// navigation itself is never affected.
pub(super) fn scroll_to_slide(index: usize) {
    let Some(kind) = deck::kind_of(index) else {
        return;
    };
    let id = format!("slide-{}", kind.label());
    if try_scroll(&id) {
        return;
    }

    let retry_id = id.clone();
    let cb = Closure::once_into_js(move || {
        if !try_scroll(&retry_id) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "scroll target missing: #{retry_id}"
            )));
        }
    });
    if let Some(w) = web_sys::window() {
        let _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

fn try_scroll(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        None => false,
    }
}
