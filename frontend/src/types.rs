//! Common types used across the frontend application.
//!
//! This module centralizes type definitions shared by the workflow,
//! the services and the components.
//!
//! # Categories
//!
//! - **Selection Types** - the two picked files and their multipart pairing
//! - **Result Types** - the combined image and how it is displayed
//! - **Workflow Types** - submission lifecycle
//! - **Error Types** - user-facing notices and transport failures

use std::fmt;

use thiserror::Error;

use crate::config::{ACCEPT_MEDIA_TYPE, DOWNLOAD_FILE_NAME, IMAGE_FIELDS};

// =============================================================================
// Selection Types
// =============================================================================

/// A file picked by the user through a file input.
///
/// Implemented for [`web_sys::File`] in the browser and by in-memory
/// fakes in tests.
pub trait SelectedFile {
    /// Size in bytes.
    fn size(&self) -> u64;
    /// File name as reported by the picker.
    fn name(&self) -> String;
}

impl SelectedFile for web_sys::File {
    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn name(&self) -> String {
        web_sys::File::name(self)
    }
}

/// Which of the two preview elements a file is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewSlot {
    First,
    Second,
}

impl PreviewSlot {
    /// Both slots, in submission order.
    pub const ALL: [PreviewSlot; 2] = [PreviewSlot::First, PreviewSlot::Second];

    /// Multipart field name for this slot.
    pub fn field(&self) -> &'static str {
        IMAGE_FIELDS[self.index()]
    }

    pub fn index(&self) -> usize {
        match self {
            PreviewSlot::First => 0,
            PreviewSlot::Second => 1,
        }
    }
}

/// A validated pair of files, ready to be sent.
#[derive(Clone, Debug)]
pub struct Submission<F> {
    pub image1: F,
    pub image2: F,
}

impl<F> Submission<F> {
    /// Build the multipart pairing for this submission.
    pub fn payload(&self) -> SubmissionPayload<'_, F> {
        SubmissionPayload {
            parts: [
                (PreviewSlot::First.field(), &self.image1),
                (PreviewSlot::Second.field(), &self.image2),
            ],
        }
    }
}

/// Multipart body description: exactly two named parts, in order.
#[derive(Debug)]
pub struct SubmissionPayload<'a, F> {
    parts: [(&'static str, &'a F); 2],
}

impl<'a, F> SubmissionPayload<'a, F> {
    /// `(field name, file)` pairs in the order they are appended.
    pub fn parts(&self) -> impl Iterator<Item = (&'static str, &'a F)> + '_ {
        self.parts.iter().copied()
    }
}

/// One outbound POST: where, what is accepted back, and the body.
#[derive(Debug)]
pub struct CombineRequest<'a, F> {
    pub endpoint: &'a str,
    /// Value of the `Accept` header.
    pub accept: &'static str,
    pub payload: SubmissionPayload<'a, F>,
}

impl<'a, F> CombineRequest<'a, F> {
    pub fn new(endpoint: &'a str, payload: SubmissionPayload<'a, F>) -> Self {
        Self {
            endpoint,
            accept: ACCEPT_MEDIA_TYPE,
            payload,
        }
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// The combined image returned by the remote function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultArtifact {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// What the remote function answered, body already read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteReply {
    /// 2xx with a binary body.
    Combined(ResultArtifact),
    /// Any other status with its text body.
    Rejected { status: u16, body: String },
}

/// Display state of the result image and download link.
///
/// Both elements are driven by the same object URL. The link stays
/// hidden until a URL has been bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultView {
    url: Option<String>,
}

impl ResultView {
    /// View for a freshly created object URL.
    pub fn bind(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    pub fn image_src(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn download_href(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn download_name(&self) -> &'static str {
        DOWNLOAD_FILE_NAME
    }

    pub fn is_download_visible(&self) -> bool {
        self.url.is_some()
    }
}

// =============================================================================
// Workflow Types
// =============================================================================

/// Lifecycle of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Validating,
    /// Validation failed; no request was sent. Followed by `Idle`.
    Rejected,
    /// Previews shown, request in flight.
    Submitting,
    Succeeded,
    Failed,
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Combined(ResultArtifact),
    Rejected(UploadError),
    Failed(UploadError),
}

impl Outcome {
    pub fn state(&self) -> WorkflowState {
        match self {
            Outcome::Combined(_) => WorkflowState::Succeeded,
            Outcome::Rejected(_) => WorkflowState::Rejected,
            Outcome::Failed(_) => WorkflowState::Failed,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Failure of the request/response cycle itself.
///
/// Only ever logged, never shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(context: &str, detail: impl fmt::Debug) -> Self {
        Self(format!("{}: {:?}", context, detail))
    }
}

/// Upload workflow errors.
///
/// `Display` is the exact notice shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// One or both files not selected.
    #[error("Please select both images.")]
    MissingInput,

    /// A file exceeds the size cap.
    #[error("Each file must be under 2MB.")]
    OversizeInput { field: &'static str, size: u64 },

    /// The combiner answered with a non-success status.
    #[error("Error combining images: {0}")]
    RemoteFailure(String),

    /// The request or the body read failed.
    #[error("An error occurred. Please try again.")]
    TransportFailure(#[source] TransportError),
}

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        UploadError::TransportFailure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_match_user_messages() {
        assert_eq!(UploadError::MissingInput.to_string(), "Please select both images.");
        assert_eq!(
            UploadError::OversizeInput { field: "image2", size: 3_000_000 }.to_string(),
            "Each file must be under 2MB."
        );
        assert_eq!(
            UploadError::RemoteFailure("bad request".to_string()).to_string(),
            "Error combining images: bad request"
        );
    }

    #[test]
    fn test_transport_detail_stays_out_of_notice() {
        let err: UploadError = TransportError("TypeError: Failed to fetch".to_string()).into();
        assert_eq!(err.to_string(), "An error occurred. Please try again.");

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("TypeError: Failed to fetch"));
    }

    #[test]
    fn test_result_view_hidden_until_bound() {
        let view = ResultView::default();
        assert!(!view.is_download_visible());
        assert_eq!(view.image_src(), None);

        let view = ResultView::bind("blob:http://localhost/abc");
        assert!(view.is_download_visible());
        assert_eq!(view.image_src(), view.download_href());
        assert_eq!(view.download_name(), "combined_image.jpg");
    }

    #[test]
    fn test_payload_fields_in_order() {
        let submission = Submission { image1: "a.png", image2: "b.png" };
        let parts: Vec<_> = submission.payload().parts().collect();
        assert_eq!(parts, vec![("image1", &"a.png"), ("image2", &"b.png")]);
    }

    #[test]
    fn test_outcome_states() {
        assert_eq!(
            Outcome::Failed(UploadError::MissingInput).state(),
            WorkflowState::Failed
        );
    }
}
