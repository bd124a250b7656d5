use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::scheduler::{Scheduler, TimerId};

/// [`Scheduler`] on top of the browser's timers and animation frames.
///
/// One-shot timeouts are forgotten once armed; cancelling one flips a flag
/// its callback checks. Intervals are owned here and cleared on cancel, which
/// must not happen from inside that interval's own callback.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    pending: Rc<RefCell<HashMap<TimerId, Rc<Cell<bool>>>>>,
    intervals: RefCell<HashMap<TimerId, Interval>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TimerId(id)
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        let id = self.allocate();
        let cancelled = Rc::new(Cell::new(false));
        self.pending.borrow_mut().insert(id, cancelled.clone());

        let pending = self.pending.clone();
        Timeout::new(delay_ms, move || {
            pending.borrow_mut().remove(&id);
            if !cancelled.get() {
                task();
            }
        })
        .forget();
        id
    }

    fn repeat(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TimerId {
        let id = self.allocate();
        let interval = Interval::new(period_ms, move || task());
        self.intervals.borrow_mut().insert(id, interval);
        id
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn cancel(&self, id: TimerId) {
        if let Some(flag) = self.pending.borrow_mut().remove(&id) {
            flag.set(true);
        }
        // Dropping the interval clears it.
        self.intervals.borrow_mut().remove(&id);
    }
}
