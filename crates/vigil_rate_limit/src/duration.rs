//! Reset duration parsing.
//!
//! Reset headers carry short strings such as `30s`, `2m` or `1h`.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([smh])$").expect("Valid duration regex"));

/// Parse a `<digits><unit>` duration, where unit is `s`, `m` or `h`.
///
/// Returns `None` when the text does not match or the value overflows.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vigil_rate_limit::try_parse_duration;
///
/// assert_eq!(try_parse_duration("2m"), Some(Duration::from_secs(120)));
/// assert_eq!(try_parse_duration("0s"), Some(Duration::ZERO));
/// assert_eq!(try_parse_duration("soon"), None);
/// ```
pub fn try_parse_duration(text: &str) -> Option<Duration> {
    parse_millis(text).map(Duration::from_millis)
}

/// Parse a `<digits><unit>` duration into milliseconds.
///
/// Malformed input yields `0`, which callers read as "no wait".
///
/// # Examples
///
/// ```
/// use vigil_rate_limit::parse_duration;
///
/// assert_eq!(parse_duration("30s"), 30_000);
/// assert_eq!(parse_duration("1h"), 3_600_000);
/// assert_eq!(parse_duration("5x"), 0);
/// ```
pub fn parse_duration(text: &str) -> u64 {
    parse_millis(text).unwrap_or(0)
}

fn parse_millis(text: &str) -> Option<u64> {
    let captures = DURATION_PATTERN.captures(text)?;
    let value: u64 = captures[1].parse().ok()?;
    let unit_millis = match &captures[2] {
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        _ => return None,
    };
    value.checked_mul(unit_millis)
}
