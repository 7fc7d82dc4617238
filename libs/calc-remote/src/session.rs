//! Async action driver with remote-resolved arithmetic.
//!
//! A [`Session`] owns a state snapshot and an evaluation policy. Equals and
//! chained operators resolve their pending arithmetic through the fallback
//! evaluator and feed the engine a finished value; every other action is a
//! plain reducer transition. The engine never sees the remote path.

use calc_engine::{apply, resolve_equals, resolve_operator, Action, CalculatorState};

use crate::evaluator::{EvalOutcome, EvalSource, FallbackEvaluator};

/// Result of dispatching one action.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub state: CalculatorState,
    /// Source of the arithmetic when this action resolved a pending
    /// operation; `None` for non-evaluating actions and discarded results.
    pub source: Option<EvalSource>,
}

/// A single calculator session: state snapshot plus evaluation policy.
pub struct Session {
    state: CalculatorState,
    evaluator: FallbackEvaluator,
}

impl Session {
    pub fn new(evaluator: FallbackEvaluator) -> Self {
        Self {
            state: CalculatorState::initial(),
            evaluator,
        }
    }

    /// Session that evaluates everything locally.
    pub fn local() -> Self {
        Self::new(FallbackEvaluator::local_only())
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Dispatch one action and return the new snapshot.
    ///
    /// A superseded remote response leaves the state untouched; a failed
    /// remote attempt falls through to the local `apply` path, so state
    /// never changes partially.
    pub async fn dispatch(&mut self, action: Action) -> Dispatched {
        if let Some((a, operator)) = self.state.pending_operation() {
            let b = self.state.display_value();
            match &action {
                Action::EqualsPressed => {
                    match self.evaluator.evaluate_latest(a, b, operator).await {
                        Ok(EvalOutcome::Resolved(evaluation)) => {
                            self.state = resolve_equals(&self.state, evaluation.value);
                            return Dispatched {
                                state: self.state.clone(),
                                source: Some(evaluation.source),
                            };
                        }
                        Ok(EvalOutcome::Superseded) => {
                            return Dispatched {
                                state: self.state.clone(),
                                source: None,
                            };
                        }
                        // Local arithmetic error: let the reducer capture it.
                        Err(_) => {}
                    }
                }
                Action::OperatorInput { operator: next_op } => {
                    match self.evaluator.evaluate_latest(a, b, operator).await {
                        Ok(EvalOutcome::Resolved(evaluation)) => {
                            self.state = resolve_operator(&self.state, evaluation.value, *next_op);
                            return Dispatched {
                                state: self.state.clone(),
                                source: Some(evaluation.source),
                            };
                        }
                        Ok(EvalOutcome::Superseded) => {
                            return Dispatched {
                                state: self.state.clone(),
                                source: None,
                            };
                        }
                        Err(_) => {}
                    }
                }
                _ => {}
            }
        }

        self.state = apply(&self.state, &action);
        Dispatched {
            state: self.state.clone(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{RemoteClient, RemoteConfig};
    use calc_engine::{CalcError, Operator, ERROR_DISPLAY};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn digit(d: char) -> Action {
        Action::NumberInput { digit: d }
    }

    #[tokio::test]
    async fn test_local_session_end_to_end() {
        let mut session = Session::local();
        session.dispatch(digit('2')).await;
        session
            .dispatch(Action::OperatorInput {
                operator: Operator::Add,
            })
            .await;
        session.dispatch(digit('3')).await;
        let dispatched = session.dispatch(Action::EqualsPressed).await;

        assert_eq!(dispatched.state.display, "5");
        assert_eq!(dispatched.source, Some(EvalSource::Local));
        assert_eq!(session.state().history().len(), 1);
    }

    #[tokio::test]
    async fn test_remote_session_tags_source() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/calculate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 5.0})))
            .mount(&server)
            .await;

        let client = RemoteClient::new(RemoteConfig::new(server.uri())).unwrap();
        let mut session = Session::new(FallbackEvaluator::new(Some(client)));

        session.dispatch(digit('2')).await;
        session
            .dispatch(Action::OperatorInput {
                operator: Operator::Add,
            })
            .await;
        session.dispatch(digit('3')).await;
        let dispatched = session.dispatch(Action::EqualsPressed).await;

        assert_eq!(dispatched.state.display, "5");
        assert_eq!(dispatched.source, Some(EvalSource::Remote));
        assert_eq!(session.state().history()[0].calculation, "2 + 3 = 5");
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_invisible_beyond_source() {
        let config =
            RemoteConfig::new("http://127.0.0.1:9").with_timeout(std::time::Duration::from_millis(200));
        let client = RemoteClient::new(config).unwrap();
        let mut session = Session::new(FallbackEvaluator::new(Some(client)));

        session.dispatch(digit('6')).await;
        session
            .dispatch(Action::OperatorInput {
                operator: Operator::Multiply,
            })
            .await;
        session.dispatch(digit('7')).await;
        let dispatched = session.dispatch(Action::EqualsPressed).await;

        assert_eq!(dispatched.state.display, "42");
        assert_eq!(dispatched.source, Some(EvalSource::Local));
    }

    #[tokio::test]
    async fn test_division_by_zero_is_captured_by_reducer() {
        let mut session = Session::local();
        session.dispatch(digit('5')).await;
        session
            .dispatch(Action::OperatorInput {
                operator: Operator::Divide,
            })
            .await;
        session.dispatch(digit('0')).await;
        let dispatched = session.dispatch(Action::EqualsPressed).await;

        assert_eq!(dispatched.state.display, ERROR_DISPLAY);
        assert_eq!(dispatched.state.error, Some(CalcError::DivisionByZero));
        assert_eq!(dispatched.source, None);
        // The pending equation is not restashed.
        assert_eq!(dispatched.state.equation, "5 / ");
    }

    #[tokio::test]
    async fn test_non_evaluating_actions_pass_through() {
        let mut session = Session::local();
        session.dispatch(digit('8')).await;
        let dispatched = session.dispatch(Action::ClearAll).await;
        assert_eq!(dispatched.state.display, "0");
        assert_eq!(dispatched.source, None);
    }
}
