//! Utilities for date and amount formatting
//!
//! Dates travel as ISO `YYYY-MM-DD` strings and are shown as `DD/MM/YYYY`.

use chrono::NaiveDate;

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format an amount with a leading dollar sign, keeping the value as sent
pub fn format_money(value: f64) -> String {
    format!("${}", value)
}
