//! Remote-first evaluation with deterministic local fallback.
//!
//! The remote attempt never mutates anything: it either resolves to a value
//! that the caller then applies, or it fails and the local arithmetic runs
//! instead. The only user-visible difference between the two paths is the
//! source tag.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use calc_engine::{evaluate, Operator};

use crate::client::RemoteClient;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalSource {
    Remote,
    Local,
}

/// A resolved evaluation with its source tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub source: EvalSource,
}

/// Outcome of a latest-wins evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalOutcome {
    Resolved(Evaluation),
    /// A newer request was issued while this one was in flight; its result
    /// must be ignored (last-action-wins ordering).
    Superseded,
}

/// Evaluator that tries the remote endpoint first and falls back to local
/// arithmetic on any failure. Without a remote client it evaluates locally
/// only.
pub struct FallbackEvaluator {
    remote: Option<RemoteClient>,
    generation: AtomicU64,
}

impl FallbackEvaluator {
    pub fn new(remote: Option<RemoteClient>) -> Self {
        Self {
            remote,
            generation: AtomicU64::new(0),
        }
    }

    pub fn local_only() -> Self {
        Self::new(None)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Evaluate `a operator b`, remote-first.
    ///
    /// Remote failures (network, non-success status, malformed payload) are
    /// recovered transparently by the local path. Local arithmetic errors
    /// (division by zero) are returned as engine errors.
    pub async fn evaluate(
        &self,
        a: f64,
        b: f64,
        operator: Operator,
    ) -> calc_engine::Result<Evaluation> {
        if let Some(remote) = &self.remote {
            match remote.calculate(a, b, operator).await {
                Ok(value) => {
                    return Ok(Evaluation {
                        value,
                        source: EvalSource::Remote,
                    });
                }
                Err(error) => {
                    warn!(error = %error, "remote evaluation unavailable, falling back to local");
                }
            }
        }
        let value = evaluate(a, b, operator)?;
        Ok(Evaluation {
            value,
            source: EvalSource::Local,
        })
    }

    /// Latest-wins variant of [`evaluate`](Self::evaluate): if another
    /// evaluation is issued through this evaluator while this one is in
    /// flight, the stale outcome is discarded.
    pub async fn evaluate_latest(
        &self,
        a: f64,
        b: f64,
        operator: Operator,
    ) -> calc_engine::Result<EvalOutcome> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.evaluate(a, b, operator).await;
        if self.generation.load(Ordering::SeqCst) != token {
            debug!(token, "discarding stale evaluation");
            return Ok(EvalOutcome::Superseded);
        }
        result.map(EvalOutcome::Resolved)
    }
}
