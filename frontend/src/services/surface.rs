//! Leptos-backed display surface.
//!
//! Element bindings are handed in as signals by the components instead of
//! being looked up by id, so one surface drives exactly the elements it
//! was built with.

use leptos::*;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, File, Url};

use crate::types::{PreviewSlot, ResultArtifact, ResultView, TransportError, WorkflowState};
use crate::workflow::UploadSurface;

/// Signals backing the previews, the result area and the status line.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    previews: [WriteSignal<Option<String>>; 2],
    result: WriteSignal<ResultView>,
    state: WriteSignal<WorkflowState>,
}

impl SignalSurface {
    pub fn new(
        previews: [WriteSignal<Option<String>>; 2],
        result: WriteSignal<ResultView>,
        state: WriteSignal<WorkflowState>,
    ) -> Self {
        Self { previews, result, state }
    }
}

impl UploadSurface for SignalSurface {
    type File = File;

    fn notify(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("Failed to show notice {:?}: {:?}", message, e);
        }
    }

    fn show_preview(&self, slot: PreviewSlot, file: &File) {
        // Object URLs are never revoked; they live as long as the page.
        match Url::create_object_url_with_blob(file) {
            Ok(url) => self.previews[slot.index()].set(Some(url)),
            Err(e) => log::warn!("Could not preview {}: {:?}", slot.field(), e),
        }
    }

    fn show_result(&self, artifact: &ResultArtifact) -> Result<(), TransportError> {
        let url = object_url_for_bytes(&artifact.bytes, &artifact.content_type)
            .map_err(|e| TransportError::new("Could not display combined image", e))?;
        self.result.set(ResultView::bind(url));
        Ok(())
    }

    fn transition(&self, state: WorkflowState) {
        log::debug!("Workflow state: {:?}", state);
        self.state.set(state);
    }
}

/// Wrap raw bytes in a typed `Blob` and hand out an object URL for it.
fn object_url_for_bytes(bytes: &[u8], content_type: &str) -> Result<String, JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);

    let options = BlobPropertyBag::new();
    options.set_type(content_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}
