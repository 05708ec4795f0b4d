//! Field validators for raw (string) input.
//!
//! Pure functions: same input, same accept/reject result and the same
//! normalized output. No I/O. The interactive layer runs these in its
//! re-prompt loops; the codec reuses the same domain rules when parsing
//! persisted records.

use crate::models::Position;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,

    #[error("invalid characters in {0:?}: only letters, spaces, hyphens, and apostrophes are allowed")]
    InvalidCharacters(String),

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{value} is out of range ({min}-{max})")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("{value} is out of range ({min:.1}-{max:.1})")]
    RealOutOfRange { value: f32, min: f32, max: f32 },

    #[error("{0:?} is not a valid decimal number")]
    MalformedReal(String),

    #[error("invalid position {0:?}: choose from PG, SG, SF, PF, C")]
    InvalidPosition(String),

    #[error("{0:?} is not a yes/no answer")]
    InvalidYesNo(String),
}

/// Accepts letters, spaces, hyphens, and apostrophes; rejects anything else
/// or an empty string after trimming. Returns the word-capitalized form
/// (segments are delimited by whitespace, hyphens, and apostrophes).
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'') {
        return Err(ValidationError::InvalidCharacters(trimmed.to_string()));
    }
    Ok(capitalize_words(trimmed))
}

fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut new_word = true;
    for c in s.chars() {
        if c.is_whitespace() || c == '-' || c == '\'' {
            new_word = true;
            out.push(c);
        } else if new_word {
            out.extend(c.to_uppercase());
            new_word = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// All-digits string whose value lies in 0..=99.
pub fn validate_jersey(input: &str) -> Result<u8, ValidationError> {
    let value = validate_bounded_int(input, 0, 99)?;
    Ok(value as u8)
}

pub fn validate_position(input: &str) -> Result<Position, ValidationError> {
    Position::from_str(input)
        .map_err(|_| ValidationError::InvalidPosition(input.trim().to_string()))
}

/// All-digits string whose value lies in `min..=max`. Signs are rejected by
/// the digit scan, so negative input never reaches the range check.
pub fn validate_bounded_int(input: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotANumber(trimmed.to_string()));
    }
    let value: u32 =
        trimmed.parse().map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { value, min, max });
    }
    Ok(value)
}

/// Digits with at most one decimal point, value in `min..=max`.
pub fn validate_bounded_real(input: &str, min: f32, max: f32) -> Result<f32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    let mut seen_dot = false;
    for c in trimmed.chars() {
        if c == '.' {
            if seen_dot {
                return Err(ValidationError::MalformedReal(trimmed.to_string()));
            }
            seen_dot = true;
        } else if !c.is_ascii_digit() {
            return Err(ValidationError::MalformedReal(trimmed.to_string()));
        }
    }
    let value: f32 =
        trimmed.parse().map_err(|_| ValidationError::MalformedReal(trimmed.to_string()))?;
    if value < min || value > max {
        return Err(ValidationError::RealOutOfRange { value, min, max });
    }
    Ok(value)
}

/// Y/YES -> true, N/NO -> false, case-insensitive.
pub fn validate_yes_no(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_uppercase().as_str() {
        "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        other => Err(ValidationError::InvalidYesNo(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_normalizes_and_trims() {
        assert_eq!(validate_name("  o'neal  ").unwrap(), "O'Neal");
        assert_eq!(validate_name("kobe").unwrap(), "Kobe");
        assert_eq!(validate_name("van der BERG").unwrap(), "Van Der Berg");
        assert_eq!(validate_name("smith-jones").unwrap(), "Smith-Jones");
    }

    #[test]
    fn name_rejects_digits_and_empty() {
        assert_eq!(validate_name("Lu3"), Err(ValidationError::InvalidCharacters("Lu3".into())));
        assert_eq!(validate_name("   "), Err(ValidationError::Empty));
        assert!(validate_name("a.b").is_err());
    }

    #[test]
    fn jersey_bounds() {
        assert_eq!(validate_jersey("0").unwrap(), 0);
        assert_eq!(validate_jersey(" 99 ").unwrap(), 99);
        assert!(validate_jersey("100").is_err());
        assert!(validate_jersey("-1").is_err());
        assert!(validate_jersey("8a").is_err());
    }

    #[test]
    fn position_matches_case_insensitively() {
        assert_eq!(validate_position("pf").unwrap(), Position::PF);
        assert_eq!(validate_position(" c ").unwrap(), Position::C);
        assert_eq!(
            validate_position("XX"),
            Err(ValidationError::InvalidPosition("XX".into()))
        );
    }

    #[test]
    fn bounded_int_digit_scan_and_range() {
        assert_eq!(validate_bounded_int("78", 60, 96).unwrap(), 78);
        assert!(validate_bounded_int("59", 60, 96).is_err());
        assert!(validate_bounded_int("97", 60, 96).is_err());
        assert!(validate_bounded_int("7.5", 60, 96).is_err());
        assert!(validate_bounded_int("", 60, 96).is_err());
    }

    #[test]
    fn bounded_real_accepts_single_dot() {
        assert_eq!(validate_bounded_real("27.5", 0.0, 50.0).unwrap(), 27.5);
        assert_eq!(validate_bounded_real("0", 0.0, 50.0).unwrap(), 0.0);
        assert_eq!(validate_bounded_real("50.0", 0.0, 50.0).unwrap(), 50.0);
    }

    #[test]
    fn bounded_real_rejects_malformed_and_out_of_range() {
        assert_eq!(
            validate_bounded_real("27.5.3", 0.0, 50.0),
            Err(ValidationError::MalformedReal("27.5.3".into()))
        );
        // the sign fails the character scan before any range check
        assert_eq!(
            validate_bounded_real("-1.0", 0.0, 50.0),
            Err(ValidationError::MalformedReal("-1.0".into()))
        );
        assert!(validate_bounded_real("50.1", 0.0, 50.0).is_err());
        assert!(validate_bounded_real("", 0.0, 50.0).is_err());
    }

    #[test]
    fn yes_no_table() {
        assert!(validate_yes_no("y").unwrap());
        assert!(validate_yes_no("YES").unwrap());
        assert!(!validate_yes_no(" n ").unwrap());
        assert!(!validate_yes_no("No").unwrap());
        assert!(validate_yes_no("maybe").is_err());
        assert!(validate_yes_no("").is_err());
    }
}
