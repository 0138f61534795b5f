//! Typed URL query string lookups.
//!
//! [`QueryParams`] captures the query pairs of a parsed [`url::Url`] and
//! applies the coercion rules of [`crate::params`] per key. When a key
//! repeats, the first value wins.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use super::Coerced;

/// Query string parameters captured from a URL.
///
/// # Example
///
/// ```
/// use cairn::params::QueryParams;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/search?page=3&exact=true").unwrap();
/// let query = QueryParams::from_url(&url);
///
/// assert_eq!(query.int_or("page", 1).value, 3);
/// assert!(query.bool_or("exact", false).value);
///
/// let missing = query.int_or("per_page", 25);
/// assert_eq!(missing.value, 25);
/// assert!(missing.defaulted);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Capture the query pairs of a URL, keeping the first value per key.
    pub fn from_url(url: &Url) -> Self {
        let mut params = HashMap::new();
        for (key, value) in url.query_pairs() {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { params }
    }

    /// Check whether a key is present in the query string.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Get the number of captured keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check whether the query string had no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Read a key as a trimmed, non-empty string.
    pub fn string_or(&self, key: &str, fallback: &str) -> Coerced<String> {
        match self.params.get(key) {
            Some(val) => super::string_or(val, fallback),
            None => Coerced::fallback(fallback.to_string()),
        }
    }

    /// Read a key as an integer.
    pub fn int_or(&self, key: &str, fallback: i64) -> Coerced<i64> {
        match self.params.get(key) {
            Some(val) => super::int_or(val, fallback),
            None => Coerced::fallback(fallback),
        }
    }

    /// Read a key as a boolean. Accepts the same forms as
    /// [`crate::params::bool_or`].
    pub fn bool_or(&self, key: &str, fallback: bool) -> Coerced<bool> {
        match self.params.get(key) {
            Some(val) => super::bool_or(val, fallback),
            None => Coerced::fallback(fallback),
        }
    }

    /// Read a key as a float.
    pub fn float_or(&self, key: &str, fallback: f64) -> Coerced<f64> {
        match self.params.get(key) {
            Some(val) => super::float_or(val, fallback),
            None => Coerced::fallback(fallback),
        }
    }

    /// Read a key as a duration. Accepts the grammar of
    /// [`crate::params::parse_duration`].
    pub fn duration_or(&self, key: &str, fallback: Duration) -> Coerced<Duration> {
        match self.params.get(key) {
            Some(val) => super::duration_or(val, fallback),
            None => Coerced::fallback(fallback),
        }
    }
}
