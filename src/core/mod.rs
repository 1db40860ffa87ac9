//! Core domain models and business logic for the SoftSell landing page

pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod handoff;
pub mod reveal;
pub mod scheduler;
#[cfg(test)]
mod tests;
pub mod upload;

pub use chat::{ChatMessage, ChatSession, MatchMode, PendingReply, ResponseTable};
pub use contact::{
    ContactField, ContactFormState, ContactSubmission, FieldError, FieldErrorSet, FormPhase,
    LicenseType, SubmitError, validate,
};
pub use handoff::{ContactBackend, LoggingBackend, UploadBackend};
pub use reveal::{Reveal, RevealState, is_scrolled};
pub use scheduler::{ImmediateScheduler, ManualScheduler, Scheduler, TaskHandle};
pub use upload::{HeldFile, IntakeError, IntakeFile, LicenseIntake, PreviewHandle, PreviewProvider};
