//! Contact form model and validation
//!
//! Validates the "get a quote" form: name, email, company, license type and a
//! free-text message. Every field is checked independently so the form can show
//! all failing fields at once, and editing a field clears only that field's error.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Simulated network latency for a contact submission
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1500;

/// `local@domain.tld`, no whitespace and a single `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Software families we buy licenses for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    #[serde(rename = "Adobe Creative Cloud")]
    AdobeCreativeCloud,
    #[serde(rename = "Microsoft Office")]
    MicrosoftOffice,
    #[serde(rename = "Autodesk Suite")]
    AutodeskSuite,
    Salesforce,
    #[serde(rename = "SAP")]
    Sap,
    Oracle,
    Other,
}

impl LicenseType {
    /// All license types in the order they appear in the select box
    pub const ALL: [LicenseType; 7] = [
        LicenseType::AdobeCreativeCloud,
        LicenseType::MicrosoftOffice,
        LicenseType::AutodeskSuite,
        LicenseType::Salesforce,
        LicenseType::Sap,
        LicenseType::Oracle,
        LicenseType::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LicenseType::AdobeCreativeCloud => "Adobe Creative Cloud",
            LicenseType::MicrosoftOffice => "Microsoft Office",
            LicenseType::AutodeskSuite => "Autodesk Suite",
            LicenseType::Salesforce => "Salesforce",
            LicenseType::Sap => "SAP",
            LicenseType::Oracle => "Oracle",
            LicenseType::Other => "Other",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LicenseType {
    type Err = FieldError;

    /// Parses the select box value; the empty placeholder is not a license type
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LicenseType::ALL
            .into_iter()
            .find(|t| t.display_name() == s)
            .ok_or(FieldError::LicenseTypeRequired)
    }
}

/// Form fields, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::LicenseType,
        ContactField::Message,
    ];

    /// HTML `name`/`id` attribute for the field
    pub fn input_name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::LicenseType => "licenseType",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Company => "Company",
            ContactField::LicenseType => "License Type",
            ContactField::Message => "Message",
        }
    }
}

/// A single field failure. The `Display` text is shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    EmailInvalid,
    #[error("Company is required")]
    CompanyRequired,
    #[error("Please select a license type")]
    LicenseTypeRequired,
    #[error("Message is required")]
    MessageRequired,
}

/// Errors currently shown on the form, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    errors: BTreeMap<ContactField, FieldError>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: ContactField, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Clear one field's error, leaving the others in place
    pub fn clear(&mut self, field: ContactField) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// Failing fields in display order
    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.errors.keys().copied()
    }

    /// Error message for a field, ready for display
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }
}

/// The contact form record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

impl ContactSubmission {
    /// Current value of a field as it appears in the input
    pub fn value(&self, field: ContactField) -> String {
        match field {
            ContactField::Name => self.name.clone(),
            ContactField::Email => self.email.clone(),
            ContactField::Company => self.company.clone(),
            ContactField::LicenseType => self
                .license_type
                .map(|t| t.display_name().to_string())
                .unwrap_or_default(),
            ContactField::Message => self.message.clone(),
        }
    }

    /// Set a field from raw input. An unknown license type leaves the field unset.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::LicenseType => self.license_type = value.parse().ok(),
            ContactField::Message => self.message = value,
        }
    }
}

/// Check the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        Err(FieldError::EmailRequired)
    } else if !is_valid_email(email) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// Validates every field independently and returns all failures
pub fn validate(submission: &ContactSubmission) -> FieldErrorSet {
    let mut errors = FieldErrorSet::new();

    if submission.name.trim().is_empty() {
        errors.insert(ContactField::Name, FieldError::NameRequired);
    }

    if let Err(e) = validate_email(&submission.email) {
        errors.insert(ContactField::Email, e);
    }

    if submission.company.trim().is_empty() {
        errors.insert(ContactField::Company, FieldError::CompanyRequired);
    }

    if submission.license_type.is_none() {
        errors.insert(ContactField::LicenseType, FieldError::LicenseTypeRequired);
    }

    if submission.message.trim().is_empty() {
        errors.insert(ContactField::Message, FieldError::MessageRequired);
    }

    errors
}

/// Where the form is in its submit cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Waiting out the simulated latency
    Submitting,
    /// Thank-you panel is shown
    Submitted,
}

/// Why a submit attempt did not go through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0} field(s) failed validation")]
    Invalid(usize),
    #[error("a submission is already in progress")]
    InFlight,
}

/// Full state of the contact form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    pub submission: ContactSubmission,
    pub errors: FieldErrorSet,
    pub phase: FormPhase,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply user input to a field, clearing that field's error only
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.submission.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and, if clean, move to the pending state.
    ///
    /// Returns the record to hand off. Errors from this attempt replace the
    /// previous error set.
    pub fn submit(&mut self) -> Result<ContactSubmission, SubmitError> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.errors = validate(&self.submission);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.len()));
        }

        self.phase = FormPhase::Submitting;
        Ok(self.submission.clone())
    }

    /// Called when the simulated latency elapses
    pub fn complete(&mut self) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = FormPhase::Submitted;
        self.submission = ContactSubmission::default();
    }

    /// "Send Another Message"
    pub fn start_over(&mut self) {
        self.phase = FormPhase::Editing;
        self.submission = ContactSubmission::default();
        self.errors = FieldErrorSet::new();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }
}
