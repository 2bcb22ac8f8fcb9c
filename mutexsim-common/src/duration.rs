use std::time::Duration;

use crate::{MutexSimError, Result};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Nanoseconds per unit suffix. Longer suffixes first so "ms" wins over "m".
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1_000.0),
    ("µs", 1_000.0), // U+00B5 micro sign
    ("μs", 1_000.0), // U+03BC greek mu
    ("ms", 1_000_000.0),
    ("s", NANOS_PER_SEC),
    ("m", 60.0 * NANOS_PER_SEC),
    ("h", 3_600.0 * NANOS_PER_SEC),
];

/// Parse a duration string such as `"500us"`, `"1.5ms"` or `"1h30m"`.
///
/// The input is a sequence of decimal numbers, each followed by a unit
/// (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`). A leading `+` is accepted and a
/// bare `"0"` needs no unit. Negative durations are rejected.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = || MutexSimError::InvalidDuration(input.to_string());

    let mut rest = input.strip_prefix('+').unwrap_or(input);
    if rest.starts_with('-') {
        return Err(MutexSimError::InvalidDuration(format!("{input} is negative")));
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_nanos = 0.0_f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." || number.matches('.').count() > 1 {
            return Err(invalid());
        }
        let value: f64 = number.parse().map_err(|_| invalid())?;

        let (suffix, nanos_per_unit) = UNITS
            .iter()
            .filter(|(suffix, _)| tail.starts_with(suffix))
            .max_by_key(|(suffix, _)| suffix.len())
            .ok_or_else(|| {
                MutexSimError::InvalidDuration(format!("missing or unknown unit in {input}"))
            })?;

        total_nanos += value * nanos_per_unit;
        rest = &tail[suffix.len()..];
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(MutexSimError::InvalidDuration(format!("{input} overflows")));
    }
    Ok(Duration::from_nanos(total_nanos.round() as u64))
}
