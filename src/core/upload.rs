//! License file intake
//!
//! Accepts a single license document from a drop or file picker, checks its
//! extension and size, and keeps track of the preview handle created for it.
//! Preview handles are a scarce browser resource (object URLs), so every handle
//! this module creates is revoked when its file is removed or replaced.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest accepted license document (5 MB)
pub const MAX_LICENSE_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Accepted filename suffixes, compared case-insensitively
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".pdf", ".txt", ".doc", ".docx"];

/// How many files a single drop may carry before the whole drop is refused
pub const MAX_FILES_PER_DROP: usize = 1;

/// Batch-level rejection. The `Display` text is shown under the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please upload only PDF, TXT, DOC, or DOCX files.")]
    UnsupportedType,
    #[error("Files must be smaller than 5MB.")]
    TooLarge,
}

/// A file as delivered by the drop zone or picker
pub trait IntakeFile {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> u64;
}

/// Opaque reference used to preview a selected file (an object URL in the browser)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Creates and releases preview handles
pub trait PreviewProvider<F: IntakeFile> {
    /// `None` when the platform could not create a handle; the file is still held
    fn create(&self, file: &F) -> Option<PreviewHandle>;
    fn revoke(&self, handle: &PreviewHandle);
}

/// A validated file waiting to be submitted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeldFile {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub preview: Option<PreviewHandle>,
}

impl HeldFile {
    /// Size in megabytes with two decimals, e.g. "1.00 MB"
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Whether the filename ends in one of the accepted suffixes
pub fn has_allowed_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Validate a batch as a whole: type first, then size
pub fn validate_batch<F: IntakeFile>(batch: &[F]) -> Result<(), IntakeError> {
    if batch.iter().any(|f| !has_allowed_extension(&f.file_name())) {
        return Err(IntakeError::UnsupportedType);
    }

    if batch.iter().any(|f| f.byte_size() > MAX_LICENSE_FILE_SIZE) {
        return Err(IntakeError::TooLarge);
    }

    Ok(())
}

/// Apply the single-file rule of the drop zone.
///
/// A drop carrying more than [`MAX_FILES_PER_DROP`] files is refused entirely,
/// matching how the picker behaves with `multiple` disabled.
pub fn admit<F>(files: Vec<F>) -> Vec<F> {
    if files.len() > MAX_FILES_PER_DROP {
        tracing::warn!(
            count = files.len(),
            max = MAX_FILES_PER_DROP,
            "Refusing drop with too many files"
        );
        return Vec::new();
    }
    files
}

/// State of the upload card
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LicenseIntake {
    files: Vec<HeldFile>,
    error: Option<IntakeError>,
}

impl LicenseIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[HeldFile] {
        &self.files
    }

    pub fn error(&self) -> Option<IntakeError> {
        self.error
    }

    /// Whether the submit affordance should be shown
    pub fn can_submit(&self) -> bool {
        !self.files.is_empty()
    }

    /// Handle a drop or picker selection that passed [`admit`].
    ///
    /// Returns the number of files now held from this batch. An empty batch only
    /// clears the previous error.
    pub fn accept<F, P>(&mut self, batch: &[F], previews: &P) -> Result<usize, IntakeError>
    where
        F: IntakeFile,
        P: PreviewProvider<F>,
    {
        self.error = None;

        if batch.is_empty() {
            return Ok(0);
        }

        if let Err(e) = validate_batch(batch) {
            tracing::debug!(error = %e, "License batch rejected");
            self.error = Some(e);
            return Err(e);
        }

        self.release::<F, P>(previews);
        self.files = batch
            .iter()
            .map(|f| HeldFile {
                id: Uuid::new_v4(),
                name: f.file_name(),
                size: f.byte_size(),
                preview: previews.create(f),
            })
            .collect();

        tracing::info!(count = self.files.len(), "License file accepted");
        Ok(self.files.len())
    }

    /// Remove a held file and revoke its preview handle
    pub fn remove<F, P>(&mut self, id: Uuid, previews: &P) -> Option<HeldFile>
    where
        F: IntakeFile,
        P: PreviewProvider<F>,
    {
        let index = self.files.iter().position(|f| f.id == id)?;
        let file = self.files.remove(index);
        if let Some(handle) = &file.preview {
            previews.revoke(handle);
        }
        Some(file)
    }

    /// Revoke every preview handle and drop all held files
    pub fn release<F, P>(&mut self, previews: &P)
    where
        F: IntakeFile,
        P: PreviewProvider<F>,
    {
        for file in self.files.drain(..) {
            if let Some(handle) = &file.preview {
                previews.revoke(handle);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// In-memory stand-in for a browser file
    #[derive(Clone, Debug)]
    pub struct FakeFile {
        pub name: &'static str,
        pub size: u64,
    }

    impl FakeFile {
        pub fn new(name: &'static str, size: u64) -> Self {
            Self { name, size }
        }
    }

    impl IntakeFile for FakeFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }
    }

    /// Counts handles so tests can check nothing leaks
    #[derive(Default)]
    pub struct CountingPreviews {
        pub created: RefCell<Vec<PreviewHandle>>,
        pub revoked: RefCell<Vec<PreviewHandle>>,
    }

    impl CountingPreviews {
        pub fn live(&self) -> usize {
            self.created.borrow().len() - self.revoked.borrow().len()
        }
    }

    impl PreviewProvider<FakeFile> for CountingPreviews {
        fn create(&self, file: &FakeFile) -> Option<PreviewHandle> {
            let n = self.created.borrow().len();
            let handle = PreviewHandle::new(format!("blob:test/{}/{}", n, file.name));
            self.created.borrow_mut().push(handle.clone());
            Some(handle)
        }

        fn revoke(&self, handle: &PreviewHandle) {
            self.revoked.borrow_mut().push(handle.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{CountingPreviews, FakeFile};
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("license.pdf"));
        assert!(has_allowed_extension("LICENSE.PDF"));
        assert!(has_allowed_extension("notes.Txt"));
        assert!(has_allowed_extension("agreement.doc"));
        assert!(has_allowed_extension("agreement.docx"));

        assert!(!has_allowed_extension("readme.exe"));
        assert!(!has_allowed_extension("pdf"));
        assert!(!has_allowed_extension("archive.pdf.zip"));
        assert!(!has_allowed_extension("scan.png"));
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        let result = intake.accept(&[FakeFile::new("readme.exe", 10)], &previews);
        assert_eq!(result, Err(IntakeError::UnsupportedType));
        assert_eq!(intake.error(), Some(IntakeError::UnsupportedType));
        assert!(intake.files().is_empty());
        assert_eq!(previews.created.borrow().len(), 0);
    }

    #[test]
    fn test_rejects_oversized_file() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        let result = intake.accept(&[FakeFile::new("a.pdf", 6 * MB)], &previews);
        assert_eq!(result, Err(IntakeError::TooLarge));
        assert_eq!(
            intake.error().map(|e| e.to_string()),
            Some("Files must be smaller than 5MB.".to_string())
        );
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_batch(&[FakeFile::new("a.pdf", MAX_LICENSE_FILE_SIZE)]).is_ok());
        assert_eq!(
            validate_batch(&[FakeFile::new("a.pdf", MAX_LICENSE_FILE_SIZE + 1)]),
            Err(IntakeError::TooLarge)
        );
    }

    #[test]
    fn test_type_is_checked_before_size() {
        assert_eq!(
            validate_batch(&[FakeFile::new("huge.exe", 50 * MB)]),
            Err(IntakeError::UnsupportedType)
        );
    }

    #[test]
    fn test_accepts_small_pdf() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        assert_eq!(intake.accept(&[FakeFile::new("a.pdf", MB)], &previews), Ok(1));
        assert!(intake.error().is_none());
        assert!(intake.can_submit());

        let held = &intake.files()[0];
        assert_eq!(held.name, "a.pdf");
        assert_eq!(held.size_label(), "1.00 MB");
        assert!(held.preview.is_some());
    }

    #[test]
    fn test_retry_clears_previous_error() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        let _ = intake.accept(&[FakeFile::new("readme.exe", 1)], &previews);
        assert!(intake.error().is_some());

        intake
            .accept(&[FakeFile::new("license.docx", 2048)], &previews)
            .unwrap();
        assert!(intake.error().is_none());
    }

    #[test]
    fn test_replacing_file_revokes_old_handle() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("a.pdf", 10)], &previews).unwrap();
        intake.accept(&[FakeFile::new("b.pdf", 10)], &previews).unwrap();

        assert_eq!(intake.files().len(), 1);
        assert_eq!(intake.files()[0].name, "b.pdf");
        assert_eq!(previews.revoked.borrow().len(), 1);
        assert_eq!(previews.live(), 1);
    }

    #[test]
    fn test_rejected_batch_keeps_held_file() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("a.pdf", 10)], &previews).unwrap();
        let _ = intake.accept(&[FakeFile::new("b.exe", 10)], &previews);

        assert_eq!(intake.files().len(), 1);
        assert_eq!(intake.files()[0].name, "a.pdf");
        assert_eq!(previews.live(), 1);
    }

    #[test]
    fn test_remove_revokes_handle() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("a.pdf", 10)], &previews).unwrap();
        let id = intake.files()[0].id;

        let removed = intake.remove::<FakeFile, _>(id, &previews);
        assert_eq!(removed.map(|f| f.name), Some("a.pdf".to_string()));
        assert!(intake.files().is_empty());
        assert!(!intake.can_submit());
        assert_eq!(previews.live(), 0);

        assert!(intake.remove::<FakeFile, _>(id, &previews).is_none());
    }

    #[test]
    fn test_admit_refuses_multi_file_drops() {
        let files = vec![FakeFile::new("a.pdf", 1), FakeFile::new("b.pdf", 1)];
        assert!(admit(files).is_empty());

        let single = vec![FakeFile::new("a.pdf", 1)];
        assert_eq!(admit(single).len(), 1);
    }

    #[test]
    fn test_empty_batch_only_clears_error() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("a.pdf", 10)], &previews).unwrap();
        let _ = intake.accept(&[FakeFile::new("b.exe", 10)], &previews);
        assert!(intake.error().is_some());

        assert_eq!(intake.accept::<FakeFile, _>(&[], &previews), Ok(0));
        assert!(intake.error().is_none());
        assert_eq!(intake.files().len(), 1);
    }

    #[test]
    fn test_release_revokes_everything() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("a.pdf", 10)], &previews).unwrap();
        intake.release::<FakeFile, _>(&previews);

        assert!(intake.files().is_empty());
        assert_eq!(previews.live(), 0);
    }
}
