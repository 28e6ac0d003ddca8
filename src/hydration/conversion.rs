//! Unit conversion functions
//!
//! Converts height and weight between measurement systems and parses the
//! numeric text the user types.

use serde::{Deserialize, Serialize};

use crate::models::Unit;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Pounds per kilogram (as displayed to users, not the exact 2.20462)
pub const LB_PER_KG: f64 = 2.205;

/// A directly entered value and the unit it was entered in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// This height expressed in `target`
    pub fn height_in(&self, target: Unit) -> f64 {
        convert_height(self.value, self.unit, target)
    }

    /// This weight expressed in `target`
    pub fn weight_in(&self, target: Unit) -> f64 {
        convert_weight(self.value, self.unit, target)
    }
}

/// Convert a height between units, rounding to a whole number
///
/// Same-unit conversion returns the value untouched (no rounding).
pub fn convert_height(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Metric, Unit::Imperial) => (value / CM_PER_INCH).round(),
        (Unit::Imperial, Unit::Metric) => (value * CM_PER_INCH).round(),
        _ => value,
    }
}

/// Convert a weight between units, rounding to a whole number
///
/// Same-unit conversion returns the value untouched (no rounding).
pub fn convert_weight(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Metric, Unit::Imperial) => (value * LB_PER_KG).round(),
        (Unit::Imperial, Unit::Metric) => (value / LB_PER_KG).round(),
        _ => value,
    }
}

/// Parse the leading number of a string
///
/// Leading whitespace is skipped and trailing garbage ignored, so "70kg"
/// parses as 70. Returns `None` when there is no leading number or it is
/// not finite.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Optional exponent, only consumed when followed by digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a number the way it is shown in a text field: no trailing ".0"
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}
