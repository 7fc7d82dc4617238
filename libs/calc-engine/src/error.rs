//! Error types for calc-engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel shown in the display in place of a result when evaluation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Calculation errors
///
/// Every variant is captured at the action-application boundary and recorded
/// in the state's `error` field; none of them escapes `apply`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Undefined result: {0}")]
    Undefined(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

impl CalcError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn undefined(msg: impl Into<String>) -> Self {
        Self::Undefined(msg.into())
    }

    /// Stable error code (for API payloads, logs, monitoring)
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Domain(_) => "DOMAIN_ERROR",
            Self::Undefined(_) => "UNDEFINED_RESULT",
            Self::UnknownOperator(_) => "UNKNOWN_OPERATOR",
            Self::UnknownFunction(_) => "UNKNOWN_FUNCTION",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
