//! calcsrv configuration: YAML file with environment overrides.

use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{CalcSrvError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/calcsrv.yaml";

/// Service listen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Optional upstream evaluator to delegate calculations to. Anything that
/// fails upstream is computed locally instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub url: String,
    #[serde(with = "humantime_serde", default = "default_upstream_timeout")]
    pub timeout: Duration,
}

fn default_upstream_timeout() -> Duration {
    Duration::from_secs(2)
}

/// Full service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub upstream: Option<UpstreamConfig>,
}

impl Config {
    /// Load configuration from a YAML file (default `config/calcsrv.yaml`)
    /// with `CALCSRV_`-prefixed environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(CalcSrvError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
        }
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("CALCSRV_").split("_"))
            .extract()
            .map_err(|e| CalcSrvError::Config(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration completeness.
    pub fn validate(&self) -> Result<()> {
        if self.service.host.is_empty() {
            return Err(CalcSrvError::Config("service host cannot be empty".into()));
        }
        if self.service.port == 0 {
            return Err(CalcSrvError::Config("service port cannot be 0".into()));
        }
        if let Some(upstream) = &self.upstream {
            if upstream.url.is_empty() {
                return Err(CalcSrvError::Config("upstream URL cannot be empty".into()));
            }
            if upstream.timeout.is_zero() {
                return Err(CalcSrvError::Config(
                    "upstream timeout cannot be zero".into(),
                ));
            }
        }
        Ok(())
    }
}
