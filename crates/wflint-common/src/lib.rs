//! Common utilities for the wflint workflow linter.
//!
//! This crate provides foundational pieces used across wflint crates:
//! - Centralized limits for recursive type walks
//! - Tracing subscribers for hosts, configured in code or by `WFLINT_LOG`

// Centralized limits and thresholds
pub mod limits;

// Opt-in tracing output for debugging inference
pub mod tracing_config;
pub use tracing_config::{LogFormat, TracingConfig, init_tracing};
