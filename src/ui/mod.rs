#[cfg(feature = "hydrate")]
pub mod browser;
pub mod chat_widget;
pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod scheduler;
pub mod sections;

pub use chat_widget::ChatWidget;
pub use icon::{Icon, icons};
pub use reveal::{use_reveal, use_scrolled};
pub use scheduler::{SchedulerContext, provide_scheduler_context, use_scheduler};
