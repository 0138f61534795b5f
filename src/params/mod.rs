//! Typed coercion of raw string parameters.
//!
//! Raw values arrive as opaque strings from the command line, the process
//! environment, or a URL query string. This module converts them to typed
//! values with an explicit fallback: every coercion returns a [`Coerced`]
//! carrying the parsed value and a flag telling whether the fallback was
//! used because the input was absent, blank, or unparseable.
//!
//! - [`string_or`], [`int_or`], [`bool_or`], [`float_or`], [`duration_or`] -
//!   coerce a raw string directly
//! - [`RawValue`] - opaque string newtype with the same coercions as methods
//! - [`env`] - the same coercions against environment variables
//! - [`query`] - the same coercions against URL query strings
//!
//! # Example
//!
//! ```
//! use cairn::params;
//!
//! let port = params::int_or("8080", 3000);
//! assert_eq!(port.value, 8080);
//! assert!(!port.defaulted);
//!
//! let workers = params::int_or("not-a-number", 4);
//! assert_eq!(workers.value, 4);
//! assert!(workers.defaulted);
//! ```

pub mod duration;
pub mod env;
pub mod query;

pub use duration::parse_duration;
pub use query::QueryParams;

use std::time::Duration;

/// Result of a typed coercion: the value plus whether the fallback was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coerced<T> {
    /// The parsed value, or the fallback when parsing was not possible.
    pub value: T,
    /// True when the fallback was used because the input was absent,
    /// blank, or unparseable.
    pub defaulted: bool,
}

impl<T> Coerced<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Coerce a raw string to a trimmed, non-empty string.
///
/// Falls back when the input is empty or whitespace-only.
pub fn string_or(val: &str, fallback: &str) -> Coerced<String> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return Coerced::fallback(fallback.to_string());
    }
    Coerced::parsed(trimmed.to_string())
}

/// Coerce a raw string to an integer.
///
/// Falls back when the input is empty, whitespace-only, or not a valid
/// decimal integer.
pub fn int_or(val: &str, fallback: i64) -> Coerced<i64> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return Coerced::fallback(fallback);
    }
    match trimmed.parse::<i64>() {
        Ok(parsed) => Coerced::parsed(parsed),
        Err(_) => Coerced::fallback(fallback),
    }
}

/// Coerce a raw string to a boolean.
///
/// Accepted true values are `1`, `t`, `T`, `TRUE`, `true`, `True`; accepted
/// false values are `0`, `f`, `F`, `FALSE`, `false`, `False`. Anything else
/// falls back.
pub fn bool_or(val: &str, fallback: bool) -> Coerced<bool> {
    match val.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Coerced::parsed(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Coerced::parsed(false),
        _ => Coerced::fallback(fallback),
    }
}

/// Coerce a raw string to a 64-bit float.
///
/// Falls back when the input is empty, whitespace-only, or not a valid
/// floating-point number.
pub fn float_or(val: &str, fallback: f64) -> Coerced<f64> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return Coerced::fallback(fallback);
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) => Coerced::parsed(parsed),
        Err(_) => Coerced::fallback(fallback),
    }
}

/// Coerce a raw string to a [`Duration`].
///
/// Accepts strings such as `300ms`, `1.5h`, or `2h45m`; see
/// [`parse_duration`] for the grammar. Falls back when the input is empty,
/// whitespace-only, or not a valid duration.
pub fn duration_or(val: &str, fallback: Duration) -> Coerced<Duration> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return Coerced::fallback(fallback);
    }
    match parse_duration(trimmed) {
        Some(parsed) => Coerced::parsed(parsed),
        None => Coerced::fallback(fallback),
    }
}

/// An untyped raw parameter value.
///
/// Carries the string captured from a CLI flag's `=value` portion (or any
/// other raw source) and exposes the typed coercions as methods.
///
/// # Example
///
/// ```
/// use cairn::params::RawValue;
/// use std::time::Duration;
///
/// let raw = RawValue::from("2h45m");
/// let timeout = raw.duration_or(Duration::from_secs(60));
/// assert_eq!(timeout.value, Duration::from_secs(2 * 3600 + 45 * 60));
/// assert!(!timeout.defaulted);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawValue(String);

impl RawValue {
    /// Create a raw value from any string-like input.
    pub fn new(val: impl Into<String>) -> Self {
        Self(val.into())
    }

    /// The raw string as captured, untrimmed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the raw string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coerce to a trimmed, non-empty string. See [`string_or`].
    pub fn string_or(&self, fallback: &str) -> Coerced<String> {
        string_or(&self.0, fallback)
    }

    /// Coerce to an integer. See [`int_or`].
    pub fn int_or(&self, fallback: i64) -> Coerced<i64> {
        int_or(&self.0, fallback)
    }

    /// Coerce to a boolean. See [`bool_or`].
    pub fn bool_or(&self, fallback: bool) -> Coerced<bool> {
        bool_or(&self.0, fallback)
    }

    /// Coerce to a float. See [`float_or`].
    pub fn float_or(&self, fallback: f64) -> Coerced<f64> {
        float_or(&self.0, fallback)
    }

    /// Coerce to a duration. See [`duration_or`].
    pub fn duration_or(&self, fallback: Duration) -> Coerced<Duration> {
        duration_or(&self.0, fallback)
    }
}

impl From<&str> for RawValue {
    fn from(val: &str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for RawValue {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_parses_trimmed() {
        let got = string_or("  hello  ", "fallback");
        assert_eq!(got.value, "hello");
        assert!(!got.defaulted);
    }

    #[test]
    fn string_falls_back_on_empty_and_whitespace() {
        for input in ["", "   ", "\t\n"] {
            let got = string_or(input, "fallback");
            assert_eq!(got.value, "fallback");
            assert!(got.defaulted);
        }
    }

    #[test]
    fn int_parses_valid() {
        let got = int_or(" 42 ", 0);
        assert_eq!(got.value, 42);
        assert!(!got.defaulted);

        let negative = int_or("-7", 0);
        assert_eq!(negative.value, -7);
        assert!(!negative.defaulted);
    }

    #[test]
    fn int_falls_back_on_invalid() {
        for input in ["", "  ", "abc", "4.2", "42x"] {
            let got = int_or(input, 99);
            assert_eq!(got.value, 99);
            assert!(got.defaulted);
        }
    }

    #[test]
    fn bool_accepts_all_forms() {
        for input in ["1", "t", "T", "TRUE", "true", "True"] {
            let got = bool_or(input, false);
            assert!(got.value, "input {input:?} should parse true");
            assert!(!got.defaulted);
        }
        for input in ["0", "f", "F", "FALSE", "false", "False"] {
            let got = bool_or(input, true);
            assert!(!got.value, "input {input:?} should parse false");
            assert!(!got.defaulted);
        }
    }

    #[test]
    fn bool_falls_back_on_invalid() {
        for input in ["", "yes", "no", "truth", "2"] {
            let got = bool_or(input, true);
            assert!(got.value);
            assert!(got.defaulted);
        }
    }

    #[test]
    fn float_parses_valid() {
        let got = float_or("3.25", 0.0);
        assert_eq!(got.value, 3.25);
        assert!(!got.defaulted);
    }

    #[test]
    fn float_falls_back_on_invalid() {
        let got = float_or("three", 1.5);
        assert_eq!(got.value, 1.5);
        assert!(got.defaulted);
    }

    #[test]
    fn duration_parses_valid() {
        let got = duration_or("300ms", Duration::ZERO);
        assert_eq!(got.value, Duration::from_millis(300));
        assert!(!got.defaulted);
    }

    #[test]
    fn duration_falls_back_on_invalid() {
        let fallback = Duration::from_secs(30);
        for input in ["", "  ", "fast", "10"] {
            let got = duration_or(input, fallback);
            assert_eq!(got.value, fallback);
            assert!(got.defaulted);
        }
    }

    #[test]
    fn raw_value_delegates() {
        let raw = RawValue::from(" 8080 ");
        assert_eq!(raw.as_str(), " 8080 ");
        assert_eq!(raw.int_or(0).value, 8080);
        assert_eq!(raw.string_or("x").value, "8080");
    }

    #[test]
    fn raw_value_default_is_empty() {
        let raw = RawValue::default();
        assert!(raw.is_empty());
        assert_eq!(raw.to_string(), "");
        let got = raw.bool_or(true);
        assert!(got.value);
        assert!(got.defaulted);
    }
}
