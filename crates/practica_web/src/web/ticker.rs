//! Interval-driven animation scheduling with explicit cancellation.
//!
//! Simulation slides animate a practice counter on a fixed interval. The
//! handle owns both the browser interval id and the wasm closure, so there is
//! exactly one pending schedule at a time and a stale tick can never revive a
//! slide that was paused or reset.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(super) struct IntervalTicker {
    id: Option<i32>,
    // Kept allocated while the interval may still fire; dropped on the next
    // `start` or on `cancel`.
    cb: Option<Closure<dyn FnMut()>>,
}

impl IntervalTicker {
    pub(super) fn new() -> Self {
        Self { id: None, cb: None }
    }

    pub(super) fn is_running(&self) -> bool {
        self.id.is_some()
    }

    /// Begin ticking every `period_ms`. Any previous schedule is cancelled
    /// first, so at most one is ever pending.
    pub(super) fn start(
        &mut self,
        period_ms: i32,
        tick: impl FnMut() + 'static,
    ) -> Result<(), String> {
        self.cancel();
        let window = web_sys::window().ok_or("no window")?;
        let cb = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|_| "set_interval failed")?;
        self.id = Some(id);
        self.cb = Some(cb);
        Ok(())
    }

    /// Stop the interval but keep the closure allocated.
    ///
    /// Safe to call from inside the tick itself (a closure must not be
    /// dropped while it is executing); the allocation is reclaimed by the
    /// next `start` or by `cancel`.
    pub(super) fn pause(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }

    /// Stop and release everything. Not for use from within the tick.
    pub(super) fn cancel(&mut self) {
        self.pause();
        self.cb = None;
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.pause();
    }
}
