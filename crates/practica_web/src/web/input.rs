//! Document-level keyboard and pointer shortcuts.
//!
//! Shortcuts only replay unlocked ground (the guards live in the navigation
//! state machine, not here). Events originating from text-entry targets are
//! ignored so typing in a guess box never drives the deck.

use leptos::prelude::Callback;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent};

#[derive(Clone, Copy)]
pub(super) struct Bindings {
    pub(super) on_forward: Callback<()>,
    pub(super) on_backward: Callback<()>,
    pub(super) on_toggle_menu: Callback<()>,
}

/// Owns the installed listeners; `remove` tears them down on session end.
pub(super) struct InputHandle {
    document: Document,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    mouseup: Closure<dyn FnMut(MouseEvent)>,
}

impl InputHandle {
    pub(super) fn remove(&self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.mouseup.as_ref().unchecked_ref());
    }
}

fn is_text_entry(ev: &Event) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    if target.dyn_ref::<HtmlInputElement>().is_some()
        || target.dyn_ref::<HtmlTextAreaElement>().is_some()
    {
        return true;
    }
    target
        .dyn_ref::<web_sys::HtmlElement>()
        .is_some_and(|el| el.is_content_editable())
}

/// Install the shortcut listeners on the document.
///
/// Alt+Arrow steps through unlocked slides, `m` toggles the menu, and the
/// browser back/forward mouse buttons (3/4) mirror the arrows.
pub(super) fn install(bindings: Bindings) -> Result<InputHandle, String> {
    let document = web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;

    let keydown = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
        if is_text_entry(&ev) {
            return;
        }
        match ev.key().as_str() {
            "ArrowRight" if ev.alt_key() => {
                ev.prevent_default();
                bindings.on_forward.run(());
            }
            "ArrowLeft" if ev.alt_key() => {
                ev.prevent_default();
                bindings.on_backward.run(());
            }
            "m" | "M" => bindings.on_toggle_menu.run(()),
            _ => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let mouseup = Closure::wrap(Box::new(move |ev: MouseEvent| {
        match ev.button() {
            // Browser back button.
            3 => {
                ev.prevent_default();
                bindings.on_backward.run(());
            }
            // Browser forward button.
            4 => {
                ev.prevent_default();
                bindings.on_forward.run(());
            }
            _ => {}
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    document
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
        .map_err(|_| "keydown listener rejected")?;
    document
        .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())
        .map_err(|_| "mouseup listener rejected")?;

    Ok(InputHandle {
        document,
        keydown,
        mouseup,
    })
}
