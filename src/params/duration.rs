//! Duration string parsing.
//!
//! Parses duration strings made of one or more `<number><unit>` segments,
//! such as `300ms`, `1.5h`, or `2h45m`. Supported units are `ns`, `us`
//! (or `µs`), `ms`, `s`, `m`, and `h`. Numbers may carry a fraction.
//! The bare string `0` is valid; a number without a unit is not.

use std::time::Duration;

/// Parse a duration string.
///
/// Returns `None` when the input is empty, signed, carries an unknown
/// unit, omits a unit, or overflows.
///
/// # Example
///
/// ```
/// use cairn::params::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("2h45m"), Some(Duration::from_secs(9900)));
/// assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
/// assert_eq!(parse_duration("90"), None);
/// ```
pub fn parse_duration(s: &str) -> Option<Duration> {
    if s == "0" {
        return Some(Duration::ZERO);
    }
    if s.is_empty() || s.starts_with('+') || s.starts_with('-') {
        return None;
    }

    let mut rest = s;
    let mut total_nanos = 0f64;
    while !rest.is_empty() {
        let number_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let number = &rest[..number_end];
        if number.is_empty() || number == "." {
            return None;
        }
        let value: f64 = number.parse().ok()?;
        rest = &rest[number_end..];

        let unit_end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() || *c == '.')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let unit_nanos = match &rest[..unit_end] {
            "ns" => 1.0,
            "us" | "µs" => 1_000.0,
            "ms" => 1_000_000.0,
            "s" => 1_000_000_000.0,
            "m" => 60.0 * 1_000_000_000.0,
            "h" => 3600.0 * 1_000_000_000.0,
            _ => return None,
        };
        rest = &rest[unit_end..];

        total_nanos += value * unit_nanos;
        if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
            return None;
        }
    }

    Some(Duration::from_nanos(total_nanos.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_units() {
        assert_eq!(parse_duration("15ns"), Some(Duration::from_nanos(15)));
        assert_eq!(parse_duration("15us"), Some(Duration::from_micros(15)));
        assert_eq!(parse_duration("15µs"), Some(Duration::from_micros(15)));
        assert_eq!(parse_duration("300ms"), Some(Duration::from_millis(300)));
        assert_eq!(parse_duration("45s"), Some(Duration::from_secs(45)));
        assert_eq!(parse_duration("10m"), Some(Duration::from_secs(600)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
    }

    #[test]
    fn parses_fractions() {
        assert_eq!(parse_duration("1.5h"), Some(Duration::from_secs(5400)));
        assert_eq!(parse_duration("0.5s"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration(".5s"), Some(Duration::from_millis(500)));
    }

    #[test]
    fn parses_segment_sequences() {
        assert_eq!(parse_duration("2h45m"), Some(Duration::from_secs(9900)));
        assert_eq!(
            parse_duration("1h30m10s"),
            Some(Duration::from_secs(5410))
        );
        assert_eq!(
            parse_duration("1s500ms"),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn zero_without_unit_is_valid() {
        assert_eq!(parse_duration("0"), Some(Duration::ZERO));
        assert_eq!(parse_duration("0s"), Some(Duration::ZERO));
    }

    #[test]
    fn rejects_missing_unit() {
        assert_eq!(parse_duration("90"), None);
        assert_eq!(parse_duration("1.5"), None);
        assert_eq!(parse_duration("2h45"), None);
    }

    #[test]
    fn rejects_signed_input() {
        assert_eq!(parse_duration("-5s"), None);
        assert_eq!(parse_duration("+5s"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("fast"), None);
        assert_eq!(parse_duration("10x"), None);
        assert_eq!(parse_duration("h"), None);
        assert_eq!(parse_duration("."), None);
        assert_eq!(parse_duration("1.2.3s"), None);
    }
}
