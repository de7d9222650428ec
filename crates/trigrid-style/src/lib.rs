//! trigrid Material Styling
//!
//! Sends a rendered text mask and a material prompt to a remote image-edit
//! service and returns the styled image. The credential is resolved before
//! any request is built, so a missing key never touches the network.
//!
//! # Example
//!
//! ```
//! use trigrid_style::{build_prompt, MaterialPreset};
//!
//! let material: MaterialPreset = "gold".parse().unwrap();
//! let prompt = build_prompt(Some(material), None).unwrap();
//! assert!(prompt.contains("gold"));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod material;

pub use client::{
    decode_rejection, decode_response, encode_request, HttpStyleClient, StyleClient, StyleRequest,
    StyledImage,
};
pub use config::{StyleConfig, API_KEY_ENV, DEFAULT_ENDPOINT};
pub use error::StyleError;
pub use material::{build_prompt, MaterialPreset};
