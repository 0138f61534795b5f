//! Typed environment variable lookups.
//!
//! Each lookup reads the live process environment and applies the same
//! coercion rules as the raw-string functions in [`crate::params`]: an
//! unset variable, a blank value, or an unparseable value all fall back,
//! and the returned [`Coerced`] says so.
//!
//! # Example
//!
//! ```
//! use cairn::params::env;
//!
//! let port = env::int_or("CAIRN_DOCTEST_UNSET_PORT", 8080);
//! assert_eq!(port.value, 8080);
//! assert!(port.defaulted);
//! ```

use std::time::Duration;

use super::Coerced;

fn lookup(name: &str) -> Option<String> {
    // A non-unicode value cannot be coerced, treat it as absent.
    std::env::var(name).ok()
}

/// Read an environment variable as a trimmed, non-empty string.
pub fn string_or(name: &str, fallback: &str) -> Coerced<String> {
    match lookup(name) {
        Some(val) => super::string_or(&val, fallback),
        None => Coerced::fallback(fallback.to_string()),
    }
}

/// Read an environment variable as an integer.
pub fn int_or(name: &str, fallback: i64) -> Coerced<i64> {
    match lookup(name) {
        Some(val) => super::int_or(&val, fallback),
        None => Coerced::fallback(fallback),
    }
}

/// Read an environment variable as a boolean.
///
/// Accepts the same forms as [`crate::params::bool_or`].
pub fn bool_or(name: &str, fallback: bool) -> Coerced<bool> {
    match lookup(name) {
        Some(val) => super::bool_or(&val, fallback),
        None => Coerced::fallback(fallback),
    }
}

/// Read an environment variable as a float.
pub fn float_or(name: &str, fallback: f64) -> Coerced<f64> {
    match lookup(name) {
        Some(val) => super::float_or(&val, fallback),
        None => Coerced::fallback(fallback),
    }
}

/// Read an environment variable as a duration.
///
/// Accepts the grammar of [`crate::params::parse_duration`].
pub fn duration_or(name: &str, fallback: Duration) -> Coerced<Duration> {
    match lookup(name) {
        Some(val) => super::duration_or(&val, fallback),
        None => Coerced::fallback(fallback),
    }
}
