//! Application configuration.
//!
//! Centralized configuration for the image combiner frontend.
//! Values are hardcoded; [`CombinerConfig`] bundles the ones the upload
//! workflow depends on so they can be swapped out in tests.

/// Remote image-combiner function.
///
/// Receives `image1` and `image2` as multipart parts, answers with a JPEG.
pub const COMBINER_ENDPOINT: &str =
    "https://21pf3197la.execute-api.us-west-1.amazonaws.com/default/image-combiner-function";

/// Maximum size of each selected image (in bytes).
///
/// 2 MB limit, enforced client-side only.
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Media type requested from the combiner via the `Accept` header.
pub const ACCEPT_MEDIA_TYPE: &str = "image/jpeg";

/// Suggested file name for the download link.
pub const DOWNLOAD_FILE_NAME: &str = "combined_image.jpg";

/// Multipart field names, in submission order.
pub const IMAGE_FIELDS: [&str; 2] = ["image1", "image2"];

// Element ids of the UI surface.
pub const FORM_ID: &str = "uploadForm";
pub const PREVIEW_IDS: [&str; 2] = ["imagePreview1", "imagePreview2"];
pub const COMBINED_IMAGE_ID: &str = "combinedImage";
pub const DOWNLOAD_LINK_ID: &str = "downloadLink";

/// Settings injected into [`crate::UploadWorkflow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinerConfig {
    /// URL the multipart request is posted to.
    pub endpoint: String,
    /// Per-file size cap in bytes (inclusive).
    pub max_file_size: u64,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            endpoint: COMBINER_ENDPOINT.to_string(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_constants() {
        let config = CombinerConfig::default();
        assert_eq!(config.endpoint, COMBINER_ENDPOINT);
        assert_eq!(config.max_file_size, 2_097_152);
        assert!(config.endpoint.ends_with("/default/image-combiner-function"));
    }
}
