//! Wire types for the remote evaluation endpoint.
//!
//! The endpoint accepts `{a, b, operation}` and answers `{result, source?}`.
//! Operation spellings are the calculator symbols; `×`/`÷` and `*`/`/` are
//! equivalent on both sides.

use serde::{Deserialize, Serialize};

use calc_engine::Operator;

/// Request body for `POST /api/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub a: f64,
    pub b: f64,
    pub operation: String,
}

impl CalculationRequest {
    pub fn new(a: f64, b: f64, operator: Operator) -> Self {
        Self {
            a,
            b,
            operation: operator.symbol().to_string(),
        }
    }
}

/// Success body returned by the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub result: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Error body returned with a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
