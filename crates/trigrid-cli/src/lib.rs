//! trigrid CLI library.
//!
//! Configuration loading and the implementations behind each `trigrid`
//! subcommand. The binary in `main.rs` only parses arguments and dispatches.

pub mod commands;
pub mod config;
