//! Common reusable UI components
//!
//! Form fields, inline messages and loading indicators shared by the
//! landing page sections and the chat widget.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, NumberedList};
pub use spinner::{InlineSpinner, TypingIndicator};
