//! Service error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use calc_engine::CalcError;

pub type Result<T> = std::result::Result<T, CalcSrvError>;

/// Errors that can occur in calcsrv
#[derive(Debug, Error)]
pub enum CalcSrvError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalcSrvError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidOperation(_) | Self::DivisionByZero => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Calculation(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CalcError> for CalcSrvError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::DivisionByZero => Self::DivisionByZero,
            CalcError::UnknownOperator(op) => Self::InvalidOperation(op),
            other => Self::Calculation(other.to_string()),
        }
    }
}

impl IntoResponse for CalcSrvError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
