//! calc-remote - Remote evaluation path for the calculator
//!
//! Delegates binary arithmetic to an external evaluation service and falls
//! back to the local engine on any failure: network errors, non-success
//! statuses, malformed payloads, and timeouts are all recovered
//! transparently. The only user-visible difference between the paths is a
//! source tag.
//!
//! Components:
//!
//! - [`RemoteClient`] - reqwest client for `POST /api/calculate`
//! - [`FallbackEvaluator`] - remote-first evaluation with local fallback and
//!   last-action-wins stale-response discard
//! - [`Session`] - async action driver that resolves pending arithmetic
//!   through the evaluator and feeds the engine finished values only

pub mod client;
pub mod error;
pub mod evaluator;
pub mod protocol;
pub mod session;

// Re-exports for convenience
pub use client::{RemoteClient, RemoteConfig};
pub use error::{RemoteError, Result};
pub use evaluator::{EvalOutcome, EvalSource, Evaluation, FallbackEvaluator};
pub use protocol::{CalculationRequest, CalculationResponse, ErrorResponse};
pub use session::{Dispatched, Session};
