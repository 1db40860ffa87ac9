//! Delayed tasks
//!
//! The page fakes network latency in two places (contact submit and chat
//! replies). Both go through [`Scheduler`] so the delays can be driven by a
//! browser timer in production and stepped by hand in tests.

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// A unit of deferred work
pub type Task = Box<dyn FnOnce()>;

/// Cancellation handle for a scheduled task
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the task from running if it has not run yet
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

pub trait Scheduler {
    /// Run `task` once after `delay`, unless the returned handle is cancelled first
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

/// Runs every task synchronously, ignoring the delay
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, task: Task) -> TaskHandle {
        task();
        TaskHandle::new()
    }
}

/// Queues tasks until [`ManualScheduler::run_pending`] is called
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(Duration, TaskHandle, Task)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|(_, handle, _)| !handle.is_cancelled())
            .count()
    }

    /// Run everything queued so far, shortest delay first. Returns how many tasks ran.
    pub fn run_pending(&self) -> usize {
        let mut queued = std::mem::take(&mut *self.queue.borrow_mut());
        queued.sort_by_key(|(delay, _, _)| *delay);

        let mut ran = 0;
        for (_, handle, task) in queued {
            if handle.is_cancelled() {
                continue;
            }
            task();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        self.queue.borrow_mut().push((delay, handle.clone(), task));
        handle
    }
}

/// Browser timer backed by `setTimeout`
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        let guard = handle.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        gloo_timers::callback::Timeout::new(millis, move || {
            if !guard.is_cancelled() {
                task();
            }
        })
        .forget();

        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::cell::Cell;

    #[test]
    fn test_immediate_runs_now() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        ImmediateScheduler.schedule(
            Duration::from_millis(1000),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_manual_defers_until_run() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();

        scheduler.schedule(
            Duration::from_millis(1500),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        assert_eq!(hits.get(), 0);
        assert_eq!(scheduler.pending_count(), 1);

        assert_eq!(scheduler.run_pending(), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();

        let handle = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        handle.cancel();

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.run_pending(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_shorter_delay_runs_first() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let slow = order.clone();
        scheduler.schedule(
            Duration::from_millis(1500),
            Box::new(move || slow.borrow_mut().push("contact")),
        );
        let fast = order.clone();
        scheduler.schedule(
            Duration::from_millis(1000),
            Box::new(move || fast.borrow_mut().push("chat")),
        );

        scheduler.run_pending();
        assert_eq!(*order.borrow(), vec!["chat", "contact"]);
    }
}
