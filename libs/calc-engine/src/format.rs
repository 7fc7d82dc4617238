//! Result formatting with a configurable precision policy.

use crate::error::ERROR_DISPLAY;

/// Format a result for the display.
///
/// Non-finite values render as the error sentinel. Magnitudes below
/// `10^-precision` collapse to `"0"`; magnitudes above `10^precision` switch
/// to exponential notation with six fractional digits. Everything else is
/// rounded to `precision` significant digits with trailing zeros stripped.
pub fn format_result(result: f64, precision: u32) -> String {
    if !result.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    let magnitude = result.abs();
    if magnitude < 10f64.powi(-(precision as i32)) {
        return "0".to_string();
    }
    if magnitude > 10f64.powi(precision as i32) {
        return format!("{:.6e}", result);
    }

    shortest(round_to_significant(result, precision))
}

/// Round to `digits` significant digits.
fn round_to_significant(value: f64, digits: u32) -> f64 {
    let digits = digits.max(1) as usize;
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

/// Shortest decimal rendering that round-trips, without a trailing `.0`.
pub(crate) fn shortest(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    let printed = buffer.format(value);
    printed.strip_suffix(".0").unwrap_or(printed).to_string()
}
