//! calcsrv - Calculation service
//!
//! HTTP evaluation endpoint for the calculator: accepts `{a, b, operation}`
//! and answers `{result, expression, source}`. Optionally delegates to an
//! upstream evaluator, falling back to local arithmetic when it is
//! unreachable.

pub mod api;
pub mod config;
pub mod error;

pub use error::{CalcSrvError, Result};

/// Service name used in logs and health payloads.
pub const SERVICE_NAME: &str = "calcsrv";

/// Service version from the crate manifest.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
