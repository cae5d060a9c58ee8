//! Lenient timestamp parsing for content-store documents.
//!
//! Documents carry creation times as strings. Three shapes are accepted:
//! RFC 3339 (`2024-01-05T10:00:00Z`), a naive ISO datetime
//! (`2024-01-05T10:00:00`, read as UTC) and a bare date (`2024-01-05`, UTC
//! midnight). Use with `#[serde(with = "crate::types::timestamp")]`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Parse a timestamp string in any of the accepted shapes.
#[must_use]
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serialize as RFC 3339 with millisecond precision.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Deserialize from any accepted shape.
///
/// # Errors
///
/// Returns an error if the value is not a string or cannot be parsed.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("unparseable timestamp: {raw}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse("2024-01-05T10:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 5, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let dt = parse("2024-03-01T23:59:59.250").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_bare_date() {
        let dt = parse("2024-01-20").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
