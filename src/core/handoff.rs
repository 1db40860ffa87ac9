//! Handoff points for validated data
//!
//! Nothing submitted on the page leaves the browser. Validated contact requests
//! and held license files are passed to a backend trait instead, and the shipped
//! [`LoggingBackend`] records a structured event and drops the data.

use serde::Serialize;

use super::contact::ContactSubmission;
use super::upload::HeldFile;

/// Receives a contact request that passed validation
pub trait ContactBackend {
    fn hand_off(&self, submission: &ContactSubmission);
}

/// Receives the files held when "Submit License for Review" is pressed
pub trait UploadBackend {
    fn hand_off(&self, files: &[HeldFile]);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadSummary<'a> {
    name: &'a str,
    size_bytes: u64,
}

/// Logs handoffs through `tracing` and discards them
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingBackend;

impl ContactBackend for LoggingBackend {
    fn hand_off(&self, submission: &ContactSubmission) {
        match serde_json::to_string(submission) {
            Ok(payload) => tracing::info!(%payload, "Contact request handed off"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize contact request"),
        }
    }
}

impl UploadBackend for LoggingBackend {
    fn hand_off(&self, files: &[HeldFile]) {
        let summary: Vec<UploadSummary<'_>> = files
            .iter()
            .map(|f| UploadSummary {
                name: &f.name,
                size_bytes: f.size,
            })
            .collect();

        match serde_json::to_string(&summary) {
            Ok(payload) => {
                tracing::info!(count = files.len(), %payload, "License files handed off")
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize license files"),
        }
    }
}
