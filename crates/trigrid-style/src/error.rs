//! Error types for the styling service.

use thiserror::Error;

/// Errors from preparing or performing a styling request.
#[derive(Debug, Error)]
pub enum StyleError {
    /// No credential configured; reported before any request is made.
    #[error("no API key configured: set TRIGRID_API_KEY or style.api_key in the config file")]
    MissingApiKey,

    /// Unknown material preset name.
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),

    /// Neither a material nor a prompt was given.
    #[error("a material or a prompt is required")]
    EmptyPrompt,

    /// The service answered with a non-success status.
    #[error("styling request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The service answered but returned no image.
    #[error("styling service returned no image data")]
    NoImageData,

    /// The returned image data is not valid base64.
    #[error("could not decode returned image: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The response body is not the expected JSON.
    #[error("malformed service response: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<ureq::Error> for StyleError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => StyleError::Rejected {
                status,
                message: "no response body".to_string(),
            },
            other => StyleError::Transport(other.to_string()),
        }
    }
}
