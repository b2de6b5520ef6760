//! Date/time pattern validation, parsing, and formatting.
//!
//! All serializer patterns are chrono strftime patterns, validated when the
//! serializer is constructed so that a bad pattern fails pipeline startup
//! instead of the first event.
//!
//! Time-zone handling is fixed so results are reproducible across runs and
//! platforms: patterns carrying an offset (`%z`, `%:z`, `%#z`) honor the
//! parsed offset, all other input is interpreted as UTC, and all output is
//! formatted in UTC. Date-only patterns parse at midnight UTC.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use sl_error::{EnrichError, Result};

/// Validates a strftime pattern.
///
/// # Errors
///
/// Returns an error if the pattern is empty or contains an unrecognized
/// format specifier.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(EnrichError::InvalidPattern("empty pattern".to_string()).into());
    }
    for item in StrftimeItems::new(pattern) {
        if matches!(item, Item::Error) {
            return Err(EnrichError::InvalidPattern(pattern.to_string()).into());
        }
    }
    Ok(())
}

/// Parses `value` as a date/time using `pattern`, in UTC.
///
/// Offset-bearing patterns honor the parsed offset; otherwise the input is
/// interpreted as UTC. Date-only input parses at midnight.
pub fn parse_datetime(value: &str, pattern: &str) -> Result<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_str(value, pattern) {
        return Ok(datetime.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    Err(EnrichError::Serialize(format!(
        "'{value}' does not match pattern '{pattern}'"
    ))
    .into())
}

/// Formats an epoch-millisecond timestamp using `pattern`, in UTC.
pub fn format_millis(millis: i64, pattern: &str) -> Result<String> {
    let datetime = Utc
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| EnrichError::Serialize(format!("timestamp {millis} is out of range")))?;
    Ok(datetime.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pattern() {
        assert!(validate_pattern("%Y-%m-%dT%H:%M:%S%z").is_ok());
        assert!(validate_pattern("%Y-%m-%d %H:%M:%S").is_ok());
        assert!(validate_pattern("").is_err());
        assert!(validate_pattern("%Q").is_err());
    }

    #[test]
    fn test_parse_with_offset() {
        let datetime =
            parse_datetime("2015-04-23T01:37:09+00:00", "%Y-%m-%dT%H:%M:%S%z").unwrap();
        assert_eq!(datetime.timestamp_millis(), 1_429_753_029_000);

        // A non-UTC offset resolves to the same instant in UTC.
        let shifted = parse_datetime("2015-04-23T03:37:09+02:00", "%Y-%m-%dT%H:%M:%S%z").unwrap();
        assert_eq!(shifted, datetime);
    }

    #[test]
    fn test_parse_naive_assumes_utc() {
        let datetime = parse_datetime("2015-04-23 01:37:09", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(datetime.timestamp_millis(), 1_429_753_029_000);
    }

    #[test]
    fn test_parse_date_only_is_midnight_utc() {
        let datetime = parse_datetime("2015-04-23", "%Y-%m-%d").unwrap();
        assert_eq!(datetime.timestamp_millis(), 1_429_747_200_000);
    }

    #[test]
    fn test_parse_mismatch_fails() {
        assert!(parse_datetime("not a date", "%Y-%m-%d").is_err());
        assert!(parse_datetime("2015-04-23", "%Y-%m-%d %H:%M:%S").is_err());
    }

    #[test]
    fn test_format_millis() {
        let formatted = format_millis(1_429_753_029_000, "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(formatted, "2015-04-23 01:37:09");
    }

    #[test]
    fn test_format_millis_out_of_range() {
        assert!(format_millis(i64::MAX, "%Y").is_err());
    }
}
