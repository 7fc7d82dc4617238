//! HTTP client for the remote evaluation endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use calc_engine::Operator;

use crate::error::{RemoteError, Result};
use crate::protocol::{CalculationRequest, CalculationResponse, ErrorResponse};

/// Remote endpoint configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the evaluation service, e.g. `http://127.0.0.1:8086`.
    pub base_url: String,
    /// Request timeout; anything past it falls back to local evaluation.
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(2),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the remote evaluation endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    config: RemoteConfig,
    client: Client,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(RemoteError::Config("remote base URL is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RemoteError::Http)?;
        Ok(Self { config, client })
    }

    /// Evaluate `a operator b` remotely.
    pub async fn calculate(&self, a: f64, b: f64, operator: Operator) -> Result<f64> {
        let url = format!(
            "{}/api/calculate",
            self.config.base_url.trim_end_matches('/')
        );
        let request = CalculationRequest::new(a, b, operator);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: CalculationResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;
        debug!(
            a,
            b,
            operator = %operator,
            result = body.result,
            source = body.source.as_deref().unwrap_or("-"),
            "remote calculate"
        );
        Ok(body.result)
    }
}
