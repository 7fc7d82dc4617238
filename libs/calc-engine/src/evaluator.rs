//! Binary and unary arithmetic with the calculator's domain rules.

use tracing::debug;

use crate::action::{Function, Operator};
use crate::error::{CalcError, Result};

/// Evaluate a binary operation on IEEE doubles.
///
/// Division by zero is rejected. `^` has no domain restriction; non-finite
/// results propagate and render as the error sentinel in the formatter.
pub fn evaluate(a: f64, b: f64, operator: Operator) -> Result<f64> {
    let result = match operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Power => a.powf(b),
    };
    debug!(a, b, operator = %operator, result, "evaluate");
    Ok(result)
}

/// Evaluate a scientific function. Trigonometric input is in degrees.
pub fn evaluate_function(function: Function, value: f64) -> Result<f64> {
    let result = match function {
        Function::Sin => value.to_radians().sin(),
        Function::Cos => value.to_radians().cos(),
        Function::Tan => {
            let result = value.to_radians().tan();
            if !result.is_finite() {
                return Err(CalcError::undefined(format!("tan({}) is undefined", value)));
            }
            result
        }
        Function::Log => {
            if value <= 0.0 {
                return Err(CalcError::domain("logarithm of a non-positive number"));
            }
            value.log10()
        }
        Function::Ln => {
            if value <= 0.0 {
                return Err(CalcError::domain(
                    "natural logarithm of a non-positive number",
                ));
            }
            value.ln()
        }
        Function::Sqrt => {
            if value < 0.0 {
                return Err(CalcError::domain("square root of a negative number"));
            }
            value.sqrt()
        }
        Function::Reciprocal => {
            if value == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            1.0 / value
        }
        Function::Square => value * value,
    };
    debug!(function = %function, value, result, "evaluate_function");
    Ok(result)
}
