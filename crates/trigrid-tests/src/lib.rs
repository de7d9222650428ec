//! trigrid End-to-End Test Infrastructure
//!
//! Integration tests for the flows that must not drift:
//!
//! - Font documents: export, import, all-or-nothing rejection
//! - Rendering: geometry, viewports, SVG and PNG output
//! - **Determinism**: byte-identical output across runs
//! - Geometric properties over random grids (proptest)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p trigrid-tests
//! ```

pub mod determinism;
pub mod fixtures;
