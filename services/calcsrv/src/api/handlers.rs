//! API handlers for the calculation service

use axum::extract::State;
use axum::response::Json;
use serde_json::json;
use tracing::info;

use calc_engine::{evaluate, Operator};
use calc_remote::EvalSource;

use crate::api::models::{
    CalculateRequest, CalculateResponse, OperationInfo, OperationsResponse,
};
use crate::api::AppState;
use crate::error::CalcSrvError;
use crate::{SERVICE_NAME, SERVICE_VERSION};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Perform one binary calculation
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, CalcSrvError> {
    let operator = Operator::from_symbol(&request.operation)
        .map_err(|_| CalcSrvError::InvalidOperation(request.operation.clone()))?;
    // The wire contract covers the four arithmetic operators only.
    if operator == Operator::Power {
        return Err(CalcSrvError::InvalidOperation(request.operation.clone()));
    }

    let (result, source) = match &state.upstream {
        Some(evaluator) => {
            let evaluation = evaluator.evaluate(request.a, request.b, operator).await?;
            let source = match evaluation.source {
                EvalSource::Remote => "upstream",
                EvalSource::Local => "local-fallback",
            };
            (evaluation.value, source)
        }
        None => (evaluate(request.a, request.b, operator)?, "local"),
    };

    let expression = format!("{} {} {}", request.a, request.operation, request.b);
    info!(%expression, result, source, "calculated");

    Ok(Json(CalculateResponse {
        result,
        expression,
        source: source.to_string(),
    }))
}

/// List supported operations
pub async fn list_operations() -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operations: vec![
            OperationInfo {
                symbol: "+",
                name: "addition",
                description: "Add two numbers",
            },
            OperationInfo {
                symbol: "-",
                name: "subtraction",
                description: "Subtract second number from first",
            },
            OperationInfo {
                symbol: "*",
                name: "multiplication",
                description: "Multiply two numbers",
            },
            OperationInfo {
                symbol: "×",
                name: "multiplication",
                description: "Multiply two numbers (alternative symbol)",
            },
            OperationInfo {
                symbol: "/",
                name: "division",
                description: "Divide first number by second",
            },
            OperationInfo {
                symbol: "÷",
                name: "division",
                description: "Divide first number by second (alternative symbol)",
            },
        ],
    })
}
