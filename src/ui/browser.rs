//! Browser bindings for the license intake

use crate::core::upload::{IntakeFile, PreviewHandle, PreviewProvider};

impl IntakeFile for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }

    fn byte_size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Preview handles backed by `URL.createObjectURL`
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlPreviews;

impl PreviewProvider<web_sys::File> for ObjectUrlPreviews {
    fn create(&self, file: &web_sys::File) -> Option<PreviewHandle> {
        match web_sys::Url::create_object_url_with_blob(file) {
            Ok(url) => Some(PreviewHandle::new(url)),
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to create preview URL");
                None
            }
        }
    }

    fn revoke(&self, handle: &PreviewHandle) {
        if let Err(e) = web_sys::Url::revoke_object_url(handle.as_str()) {
            tracing::warn!(error = ?e, url = handle.as_str(), "Failed to revoke preview URL");
        }
    }
}

/// Collect a `FileList` from a drop or picker
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
