//! Timestamp parsing and formatting for capture directives.
//!
//! Capture start times travel as text inside WAV comment metadata and are
//! represented throughout the crate as seconds since the Unix epoch (`f64`,
//! sub-second precision preserved). Parse failure is reported through the
//! non-positive sentinel `0.0` rather than an error, because a missing or
//! malformed timestamp only downgrades the source to a zero start time.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Accepted layouts for timezone-less timestamps.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a timestamp fragment to seconds since the Unix epoch.
///
/// Accepts RFC 3339 (`2020-01-01T00:00:00Z`, offsets honored) and the
/// timezone-less `YYYY-MM-DD hh:mm:ss[.fff]` layout with either a space or
/// `T` separator, interpreted as UTC. Fractional seconds are optional.
///
/// Returns `0.0` when nothing parses.
pub fn parse(text: &str) -> f64 {
    let trimmed = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return to_seconds(&instant.with_timezone(&Utc));
    }

    for layout in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return to_seconds(&naive.and_utc());
        }
    }

    0.0
}

/// Formats an epoch-seconds value for diagnostics.
///
/// The zero sentinel (and anything non-positive or unrepresentable)
/// renders as `"0"`.
pub fn format(time: f64) -> String {
    if time <= 0.0 {
        return "0".to_string();
    }

    let secs = time.trunc() as i64;
    let mut nanos = ((time - secs as f64) * 1e9).round() as i64;
    let secs = secs + nanos / 1_000_000_000;
    nanos %= 1_000_000_000;

    match Utc.timestamp_opt(secs, nanos as u32) {
        chrono::LocalResult::Single(instant) => {
            instant.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
        }
        _ => "0".to_string(),
    }
}

fn to_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_micros()) / 1e6
}
