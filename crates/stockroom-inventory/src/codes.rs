//! Conversion of compact component value codes into concrete units.
//!
//! Resistor codes mix digits with one multiplier letter whose position
//! doubles as the decimal point ("4R7" is 4.7 ohms, "5M1" is 5.1 megaohms).
//! Capacitor codes are digits plus an optional magnitude suffix ("100n" is
//! 100 nanofarads); bare digits are already picofarads.

use thiserror::Error;

/// Errors raised when a value code cannot be converted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("resistance code '{0}' has no multiplier letter (expected one of R, K, M)")]
    MissingMultiplier(String),

    #[error("value code '{0}' does not contain a readable number")]
    InvalidNumber(String),

    #[error("value code '{0}' has no numeric part")]
    MissingNumber(String),

    #[error("unknown magnitude suffix '{suffix}' in value code '{code}'")]
    UnknownSuffix { code: String, suffix: char },
}

/// Convert a resistor value code to ohms.
///
/// The first multiplier letter (R = x1, K = x1e3, M = x1e6) is read as the
/// decimal point of the surrounding numeral: "47R" -> 47.0, "4R7" -> 4.7,
/// "10K" -> 10_000, "5M1" -> 5_100_000.
pub fn parse_resistance(code: &str) -> Result<f64, CodeError> {
    let code = code.trim();
    let pos = code
        .find(|c: char| matches!(c, 'R' | 'K' | 'M'))
        .ok_or_else(|| CodeError::MissingMultiplier(code.to_string()))?;
    let multiplier = match code.as_bytes()[pos] {
        b'R' => 1.0,
        b'K' => 1e3,
        _ => 1e6,
    };

    // The letter's position is the decimal point: "5M1" reads as "5.1".
    let numeral = format!("{}.{}", &code[..pos], &code[pos + 1..]);
    let value: f64 = numeral
        .parse()
        .map_err(|_| CodeError::InvalidNumber(code.to_string()))?;

    Ok(value * multiplier)
}

/// Convert a capacitance value code to picofarads.
///
/// Leading digits give the magnitude; the first non-digit character selects
/// the multiplier (m = x1e9, u = x1e6, n = x1e3) and ends the scan, so
/// "100n" and "100nf" both read as 100_000pf. Bare digits are taken as
/// picofarads unchanged. Any other suffix is an error.
pub fn parse_capacitance(code: &str) -> Result<f64, CodeError> {
    let code = code.trim();
    let digits_end = code
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(code.len());
    let digits = &code[..digits_end];
    if digits.is_empty() {
        return Err(CodeError::MissingNumber(code.to_string()));
    }
    let value: f64 = digits
        .parse()
        .map_err(|_| CodeError::InvalidNumber(code.to_string()))?;

    let multiplier = match code[digits_end..].chars().next() {
        None => 1.0,
        Some('m') => 1e9,
        Some('u') => 1e6,
        Some('n') => 1e3,
        Some(suffix) => {
            return Err(CodeError::UnknownSuffix {
                code: code.to_string(),
                suffix,
            });
        }
    };

    Ok(value * multiplier)
}

/// Render a resistance for report output, two decimal places.
///
/// Formatting is a pure function of the value; no stream state is involved.
pub fn format_ohms(ohms: f64) -> String {
    format!("{ohms:.2}ohms")
}

/// Render a capacitance for report output, whole picofarads.
pub fn format_picofarads(picofarads: f64) -> String {
    format!("{picofarads:.0}pf")
}
