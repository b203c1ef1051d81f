//! Plain quantities with a unit suffix: RAM, weight and screen size.

use crate::dataset::columns;
use crate::error::ParseError;

/// Parse `"8GB"` into `8`. The `GB` suffix is optional.
pub fn parse_ram(raw: &str) -> Result<u32, ParseError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("GB").unwrap_or(trimmed).trim_end();
    number
        .parse::<u32>()
        .map_err(|_| ParseError::new(columns::RAM, raw, "expected a whole number of GB"))
}

/// Parse `"2.5kg"` (or `"4kgs"`) into `2.5`.
pub fn parse_weight(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix("kgs")
        .or_else(|| trimmed.strip_suffix("kg"))
        .unwrap_or(trimmed)
        .trim_end();
    match number.parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(ParseError::new(
            columns::WEIGHT,
            raw,
            "expected a non-negative number of kg",
        )),
    }
}

/// Parse the screen diagonal. It divides the pixel diagonal, so it must be positive.
pub fn parse_inches(raw: &str) -> Result<f64, ParseError> {
    match raw.trim().parse::<f64>() {
        Ok(inches) if inches.is_finite() && inches > 0.0 => Ok(inches),
        _ => Err(ParseError::new(
            columns::INCHES,
            raw,
            "expected a positive screen size",
        )),
    }
}
