//! Scheduler shared by every component that fakes latency

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::core::scheduler::{Scheduler, Task, TaskHandle};

/// Context wrapper around the page-wide [`Scheduler`]
#[derive(Clone)]
pub struct SchedulerContext(Arc<dyn Scheduler + Send + Sync>);

impl SchedulerContext {
    pub fn new(scheduler: impl Scheduler + Send + Sync + 'static) -> Self {
        Self(Arc::new(scheduler))
    }

    pub fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        self.0.schedule(delay, task)
    }
}

impl Default for SchedulerContext {
    /// Browser timers after hydration; on the server nothing is ever scheduled
    fn default() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(crate::core::scheduler::TimeoutScheduler)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(crate::core::scheduler::ImmediateScheduler)
        }
    }
}

pub fn provide_scheduler_context() -> SchedulerContext {
    let ctx = SchedulerContext::default();
    provide_context(ctx.clone());
    ctx
}

pub fn use_scheduler() -> SchedulerContext {
    use_context::<SchedulerContext>().unwrap_or_default()
}
