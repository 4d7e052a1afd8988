//! Client-side field validation shared by every form.
//!
//! Form fields arrive as raw input strings; these helpers check presence,
//! period ordering and numeric parsing before anything is sent.

/// Error shown when a period ends before it starts.
pub const PERIOD_ORDER_ERROR: &str = "La fecha de inicio debe ser anterior a la fecha de fin";

/// Fails with `message` if any value is empty or whitespace-only.
pub fn require_all(values: &[&str], message: &str) -> Result<(), String> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(message.to_string());
    }
    Ok(())
}

/// Checks that `start <= end`.
///
/// Dates are ISO `YYYY-MM-DD` strings, so string order is calendar order.
pub fn validate_period(start: &str, end: &str) -> Result<(), String> {
    if start > end {
        return Err(PERIOD_ORDER_ERROR.to_string());
    }
    Ok(())
}

/// Parses a decimal typed into a number input.
pub fn parse_decimal(value: &str, field_label: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} debe ser un número válido", field_label))
}
