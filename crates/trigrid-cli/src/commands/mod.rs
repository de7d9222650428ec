//! CLI command implementations

pub mod config;
pub mod edit;
pub mod inspect;
pub mod json_output;
pub mod merge;
pub mod new;
pub mod render;
pub mod stylize;
pub mod tester;
pub mod validate;

mod common;
