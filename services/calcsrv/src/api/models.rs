//! Request/response types for the calculation API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub a: f64,
    pub b: f64,
    pub operation: String,
}

/// Successful calculation response.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub result: f64,
    pub expression: String,
    pub source: String,
}

/// One supported operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Response of `GET /api/operations`.
#[derive(Debug, Clone, Serialize)]
pub struct OperationsResponse {
    pub operations: Vec<OperationInfo>,
}
