//! Request/response contract and the HTTP client.
//!
//! Request body:
//!
//! ```text
//! { "model": "...", "prompt": "...", "image": "data:image/png;base64,...", "size": "1024x1024", "n": 1 }
//! ```
//!
//! Response body: `{ "data": [ { "b64_json": "..." } ] }`. A response with no
//! image is a failure; failures are never retried.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use ureq::Agent;

use crate::config::StyleConfig;
use crate::error::StyleError;

/// A mask plus prompt to be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRequest {
    /// Text prompt describing the material.
    pub prompt: String,
    /// PNG-encoded mask of the rendered text.
    pub mask_png: Vec<u8>,
}

/// The styled image returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledImage {
    /// Decoded image bytes (PNG).
    pub data: Vec<u8>,
}

#[derive(Debug, Serialize)]
struct RequestBody<'a> {
    model: &'a str,
    prompt: &'a str,
    image: String,
    size: &'a str,
    n: u32,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    data: Vec<ResponseImage>,
}

#[derive(Debug, Deserialize)]
struct ResponseImage {
    #[serde(default)]
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Serializes `request` into the service's JSON body.
pub fn encode_request(request: &StyleRequest, config: &StyleConfig) -> Result<String, StyleError> {
    let body = RequestBody {
        model: &config.model,
        prompt: &request.prompt,
        image: format!("data:image/png;base64,{}", STANDARD.encode(&request.mask_png)),
        size: &config.size,
        n: 1,
    };
    Ok(serde_json::to_string(&body)?)
}

/// Extracts the first image from a success response body.
pub fn decode_response(body: &str) -> Result<StyledImage, StyleError> {
    let response: ResponseBody = serde_json::from_str(body)?;
    let b64 = response
        .data
        .into_iter()
        .find_map(|image| image.b64_json)
        .filter(|b64| !b64.is_empty())
        .ok_or(StyleError::NoImageData)?;
    let data = STANDARD.decode(b64.trim())?;
    Ok(StyledImage { data })
}

/// Builds a rejection error from a non-success response.
pub fn decode_rejection(status: u16, body: &str) -> StyleError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no response body".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        });
    StyleError::Rejected { status, message }
}

/// Anything that can turn a mask and prompt into a styled image.
pub trait StyleClient {
    fn stylize(&self, request: &StyleRequest) -> Result<StyledImage, StyleError>;
}

/// [`StyleClient`] backed by an HTTPS endpoint.
pub struct HttpStyleClient {
    agent: Agent,
    config: StyleConfig,
    api_key: String,
}

impl HttpStyleClient {
    /// Creates a client, failing with [`StyleError::MissingApiKey`] before any
    /// network activity if no credential is configured.
    pub fn new(config: StyleConfig) -> Result<Self, StyleError> {
        let api_key = config.resolve_api_key()?;
        Ok(Self::with_api_key(config, api_key))
    }

    /// Creates a client with an explicit credential.
    pub fn with_api_key(config: StyleConfig, api_key: String) -> Self {
        let tls_config = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .root_certs(RootCerts::PlatformVerifier)
            .build();
        let agent = Agent::config_builder()
            .tls_config(tls_config)
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            config,
            api_key,
        }
    }
}

impl StyleClient for HttpStyleClient {
    fn stylize(&self, request: &StyleRequest) -> Result<StyledImage, StyleError> {
        let body = encode_request(request, &self.config)?;
        log::debug!(
            "POST {} ({} byte mask, prompt {:?})",
            self.config.endpoint,
            request.mask_png.len(),
            request.prompt
        );

        let mut response = self
            .agent
            .post(&self.config.endpoint)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send(body)?;

        let status = response.status().as_u16();
        let text = response.body_mut().read_to_string()?;
        if !(200..300).contains(&status) {
            log::warn!("styling service returned status {}", status);
            return Err(decode_rejection(status, &text));
        }
        decode_response(&text)
    }
}
