//! HTTP service posting the two images to the remote combiner.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::ACCEPT_MEDIA_TYPE;
use crate::types::{CombineRequest, RemoteReply, ResultArtifact, SubmissionPayload, TransportError};
use crate::workflow::CombineTransport;

/// `fetch`-backed transport for the combiner function.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCombineClient;

impl HttpCombineClient {
    pub fn new() -> Self {
        Self
    }
}

impl CombineTransport for HttpCombineClient {
    type File = File;

    async fn post(&self, request: CombineRequest<'_, File>) -> Result<RemoteReply, TransportError> {
        let form_data = build_form_data(&request.payload)?;

        // No Content-Type here: fetch derives it from the FormData, boundary included.
        let response = Request::post(request.endpoint)
            .header("Accept", request.accept)
            .body(form_data)
            .map_err(|e| TransportError::new("Failed to build request", e))?
            .send()
            .await
            .map_err(|e| TransportError::new("HTTP request failed", e))?;

        read_reply(response).await
    }
}

/// Append every part, with its file name, in payload order.
fn build_form_data(payload: &SubmissionPayload<'_, File>) -> Result<FormData, TransportError> {
    let form_data = FormData::new().map_err(|e| TransportError::new("Failed to create FormData", e))?;

    for (field, file) in payload.parts() {
        form_data
            .append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| TransportError::new("Failed to append file", e))?;
    }

    Ok(form_data)
}

async fn read_reply(response: Response) -> Result<RemoteReply, TransportError> {
    let status = response.status();

    if !is_success(status) {
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new("Failed to read error body", e))?;
        return Ok(RemoteReply::Rejected { status, body });
    }

    let content_type = response.headers().get("content-type");
    let bytes = response
        .binary()
        .await
        .map_err(|e| TransportError::new("Failed to read image body", e))?;

    Ok(RemoteReply::Combined(combined_artifact(bytes, content_type)))
}

/// Same range `Response.ok` covers.
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Falls back to `image/jpeg` when the reply carries no content type.
fn combined_artifact(bytes: Vec<u8>, content_type: Option<String>) -> ResultArtifact {
    ResultArtifact {
        bytes,
        content_type: content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| ACCEPT_MEDIA_TYPE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_2xx_is_success() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(304));
        assert!(!is_success(400));
        assert!(!is_success(500));
    }

    #[test]
    fn test_artifact_content_type_fallback() {
        let artifact = combined_artifact(vec![0xFF, 0xD8], None);
        assert_eq!(artifact.content_type, "image/jpeg");
        assert_eq!(artifact.bytes, vec![0xFF, 0xD8]);

        let artifact = combined_artifact(vec![], Some("  ".to_string()));
        assert_eq!(artifact.content_type, "image/jpeg");

        let artifact = combined_artifact(vec![1], Some("image/png".to_string()));
        assert_eq!(artifact.content_type, "image/png");
    }
}
