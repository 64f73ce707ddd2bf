//! Upload workflow: validate, preview, send, display.
//!
//! The workflow does not touch the DOM or the network directly. It is
//! generic over two seams:
//!
//! - [`CombineTransport`] - posts the multipart payload and reads the reply
//! - [`UploadSurface`] - notices, previews and the result display
//!
//! In the browser these are [`crate::HttpCombineClient`] and
//! [`crate::SignalSurface`]; tests plug in in-memory fakes.
//!
//! ```text
//! Idle → Validating ─┬─ Rejected → Idle
//!                    └─ Submitting ─┬─ Succeeded
//!                                   └─ Failed
//! ```

use crate::config::CombinerConfig;
use crate::types::{
    CombineRequest, Outcome, PreviewSlot, RemoteReply, ResultArtifact, SelectedFile,
    Submission, TransportError, UploadError, WorkflowState,
};
use crate::validation::validate_selection;

/// Sends a submission to the combiner.
#[allow(async_fn_in_trait)]
pub trait CombineTransport {
    type File: SelectedFile;

    /// Issue one POST and read the whole body.
    ///
    /// Must not set `Content-Type`; the request layer adds the boundary.
    async fn post(&self, request: CombineRequest<'_, Self::File>) -> Result<RemoteReply, TransportError>;
}

/// Where the workflow reports to the user.
pub trait UploadSurface {
    type File: SelectedFile;

    /// Blocking notice.
    fn notify(&self, message: &str);

    /// Bind a local preview of `file` to the given slot.
    fn show_preview(&self, slot: PreviewSlot, file: &Self::File);

    /// Bind the combined image to the result image and the download link.
    fn show_result(&self, artifact: &ResultArtifact) -> Result<(), TransportError>;

    fn transition(&self, _state: WorkflowState) {}
}

/// One submit handler's worth of logic.
pub struct UploadWorkflow<T, S> {
    config: CombinerConfig,
    transport: T,
    surface: S,
}

impl<F, T, S> UploadWorkflow<T, S>
where
    F: SelectedFile,
    T: CombineTransport<File = F>,
    S: UploadSurface<File = F>,
{
    pub fn new(config: CombinerConfig, transport: T, surface: S) -> Self {
        Self {
            config,
            transport,
            surface,
        }
    }

    /// Synchronous half: validation and previews.
    ///
    /// On rejection the notice has already been shown and nothing is sent.
    pub fn prepare(&self, image1: Option<F>, image2: Option<F>) -> Result<Submission<F>, UploadError> {
        self.surface.transition(WorkflowState::Validating);

        let (image1, image2) = match validate_selection(image1, image2, self.config.max_file_size) {
            Ok(pair) => pair,
            Err(err) => {
                log::warn!("⚠️ Submission rejected: {:?}", err);
                self.surface.notify(&err.to_string());
                self.surface.transition(WorkflowState::Rejected);
                self.surface.transition(WorkflowState::Idle);
                return Err(err);
            }
        };

        self.surface.show_preview(PreviewSlot::First, &image1);
        self.surface.show_preview(PreviewSlot::Second, &image2);

        Ok(Submission { image1, image2 })
    }

    /// Asynchronous half: the single request and its handling.
    pub async fn send(&self, submission: Submission<F>) -> Outcome {
        self.surface.transition(WorkflowState::Submitting);
        log::info!(
            "📤 Sending {} + {} to {}",
            submission.image1.name(),
            submission.image2.name(),
            self.config.endpoint
        );

        let request = CombineRequest::new(&self.config.endpoint, submission.payload());

        let reply = self.transport.post(request).await.and_then(|reply| match reply {
            RemoteReply::Combined(artifact) => {
                log::info!("✅ Combined image received ({} bytes)", artifact.bytes.len());
                self.surface.show_result(&artifact)?;
                Ok(RemoteReply::Combined(artifact))
            }
            rejected => Ok(rejected),
        });

        let outcome = match reply {
            Ok(RemoteReply::Combined(artifact)) => Outcome::Combined(artifact),
            Ok(RemoteReply::Rejected { status, body }) => {
                log::warn!("Combiner answered {}: {}", status, body);
                let err = UploadError::RemoteFailure(body);
                self.surface.notify(&err.to_string());
                Outcome::Failed(err)
            }
            Err(transport_err) => {
                log::error!("Error: {}", transport_err);
                let err = UploadError::from(transport_err);
                self.surface.notify(&err.to_string());
                Outcome::Failed(err)
            }
        };

        self.surface.transition(outcome.state());
        outcome
    }

    /// Full submit handler: [`prepare`](Self::prepare) then [`send`](Self::send).
    pub async fn submit(&self, image1: Option<F>, image2: Option<F>) -> Outcome {
        match self.prepare(image1, image2) {
            Ok(submission) => self.send(submission).await,
            Err(err) => Outcome::Rejected(err),
        }
    }
}
