//! Tagged action set consumed by the reducer.
//!
//! The input surface delivers these as `{type, payload}` events; the serde
//! representation mirrors that shape, so any event outside the closed set
//! fails to deserialize and is rejected at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::state::{CalculatorMode, PreferencesUpdate};

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    /// Canonical ASCII symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Parse an operator symbol. `×` and `÷` are accepted as equivalent
    /// spellings of `*` and `/`.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s)
    }
}

/// Unary scientific functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    #[serde(rename = "sin")]
    Sin,
    #[serde(rename = "cos")]
    Cos,
    #[serde(rename = "tan")]
    Tan,
    #[serde(rename = "log")]
    Log,
    #[serde(rename = "ln")]
    Ln,
    #[serde(rename = "sqrt")]
    Sqrt,
    #[serde(rename = "1/x")]
    Reciprocal,
    #[serde(rename = "x²")]
    Square,
}

impl Function {
    /// Name used in history entries, e.g. `sqrt(9) = 3`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Reciprocal => "1/x",
            Self::Square => "x²",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "log" => Ok(Self::Log),
            "ln" => Ok(Self::Ln),
            "sqrt" => Ok(Self::Sqrt),
            "1/x" => Ok(Self::Reciprocal),
            "x²" => Ok(Self::Square),
            other => Err(CalcError::UnknownFunction(other.to_string())),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// History operations. Undo and redo are accepted but currently no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOp {
    Clear,
    Undo,
    Redo,
}

/// One discrete user action.
///
/// The reducer treats this as a closed set: payloads that violate a variant's
/// precondition (e.g. a non-digit character) leave the state unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    NumberInput { digit: char },
    DecimalInput,
    OperatorInput { operator: Operator },
    FunctionCall { function: Function, value: f64 },
    EqualsPressed,
    ClearAll,
    ClearEntry,
    Backspace,
    ModeChange { mode: CalculatorMode, preserve_state: bool },
    HistoryAction { action: HistoryOp },
    SetPreferences(PreferencesUpdate),
}
