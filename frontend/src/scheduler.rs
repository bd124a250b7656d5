//! Deferred-callback primitives.
//!
//! Everything on the page runs on the browser's event loop, so callbacks are
//! plain `FnOnce`/`FnMut` boxes without `Send`. `browser::timers` backs the
//! trait with real timers; [`ManualScheduler`] keeps a virtual clock that tests
//! advance by hand.

use std::cell::{Cell, RefCell};

/// Nominal length of one animation frame on the manual clock.
pub const FRAME_MS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId;

    /// Runs `task` every `period_ms` until cancelled.
    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerId;

    /// Runs `task` before the next paint.
    fn next_frame(&self, task: Box<dyn FnOnce()>);

    /// Cancels a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat { period: u64, task: Box<dyn FnMut()> },
}

struct Entry {
    id: TimerId,
    due: u64,
    seq: u64,
    job: Job,
}

#[derive(Default)]
struct ManualState {
    now: u64,
    next_id: u64,
    next_seq: u64,
    queue: Vec<Entry>,
}

/// Virtual-time scheduler: nothing runs until [`ManualScheduler::advance`].
///
/// Due callbacks fire in (due time, scheduling order) order, and callbacks
/// scheduled while advancing still fire within the same window.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
    running: Cell<Option<TimerId>>,
    cancelled_running: Cell<bool>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        self.advance_to(target);
    }

    /// Advances the clock to `target`, firing every callback due on the way.
    pub fn advance_to(&self, target: u64) {
        while let Some(entry) = self.pop_due(target) {
            let Entry { id, due, job, .. } = entry;
            match job {
                Job::Once(task) => task(),
                Job::Repeat { period, mut task } => {
                    self.running.set(Some(id));
                    self.cancelled_running.set(false);
                    task();
                    self.running.set(None);
                    if !self.cancelled_running.get() {
                        self.push(id, due + period, Job::Repeat { period, task });
                    }
                }
            }
        }
        let mut state = self.state.borrow_mut();
        if state.now < target {
            state.now = target;
        }
    }

    fn pop_due(&self, target: u64) -> Option<Entry> {
        let mut state = self.state.borrow_mut();
        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)?;
        let entry = state.queue.swap_remove(index);
        state.now = entry.due;
        Some(entry)
    }

    fn allocate(&self) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        TimerId(state.next_id)
    }

    fn push(&self, id: TimerId, due: u64, job: Job) {
        let mut state = self.state.borrow_mut();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Entry { id, due, seq, job });
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        let id = self.allocate();
        let due = self.now() + u64::from(delay_ms);
        self.push(id, due, Job::Once(task));
        id
    }

    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerId {
        let id = self.allocate();
        // A zero period would never let the clock move.
        let period = u64::from(period_ms.max(1));
        let due = self.now() + period;
        self.push(id, due, Job::Repeat { period, task });
        id
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) {
        self.schedule(FRAME_MS, task);
    }

    fn cancel(&self, id: TimerId) {
        if self.running.get() == Some(id) {
            self.cancelled_running.set(true);
        }
        self.state.borrow_mut().queue.retain(|entry| entry.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |name: &'static str| {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(name)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn fires_in_due_order_with_ties_in_schedule_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(30, task("late"));
        scheduler.schedule(10, task("first"));
        scheduler.schedule(10, task("second"));

        scheduler.advance(9);
        assert!(log.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["first", "second"]);

        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
        assert_eq!(scheduler.now(), 110);
    }

    #[test]
    fn nested_schedules_fire_within_the_same_window() {
        let scheduler = Rc::new(ManualScheduler::new());
        let hits = Rc::new(Cell::new(0u64));
        {
            let inner = scheduler.clone();
            let hits = hits.clone();
            scheduler.schedule(
                5,
                Box::new(move || {
                    let hits = hits.clone();
                    inner.schedule(5, Box::new(move || hits.set(hits.get() + 1)));
                }),
            );
        }
        scheduler.advance(10);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn repeat_runs_every_period_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let id = scheduler.repeat(100, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(350);
        assert_eq!(ticks.get(), 3);

        scheduler.cancel(id);
        scheduler.advance(1_000);
        assert_eq!(ticks.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_once_timer_never_fires() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let id = scheduler.schedule(10, task("never"));
        scheduler.cancel(id);
        scheduler.cancel(TimerId(999));
        scheduler.advance(50);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn next_frame_is_one_frame_away() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.next_frame(task("frame"));
        scheduler.advance(u64::from(FRAME_MS) - 1);
        assert!(log.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["frame"]);
    }
}
