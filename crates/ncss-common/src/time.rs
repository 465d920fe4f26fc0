//! Time parsing and inclusive time ranges for temporal subsetting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Parse an ISO 8601 timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T12:00:00Z`), a naive datetime assumed to be
/// UTC (`2024-01-15T12:00:00`), or a bare date (`2024-01-15`, midnight UTC).
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    Err(TimeParseError::InvalidFormat(s.to_string()))
}

/// Format a timestamp the way the writers print observation times.
pub fn format_iso8601(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// An inclusive time range. Both ends are part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a range from optional bounds; a missing bound is open.
    pub fn from_bounds(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start: start.unwrap_or(DateTime::<Utc>::MIN_UTC),
            end: end.unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Inclusive containment check.
    pub fn contains(&self, dt: &DateTime<Utc>) -> bool {
        dt >= &self.start && dt <= &self.end
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_iso8601() {
        let dt = parse_iso8601("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_naive_and_date_only() {
        let naive = parse_iso8601("2024-01-15T06:30:00").unwrap();
        assert_eq!(naive.minute(), 30);

        let date = parse_iso8601("2024-01-15").unwrap();
        assert_eq!(date.hour(), 0);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_iso8601("yesterday"),
            Err(TimeParseError::InvalidFormat(_))
        ));
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(parse_iso8601(start).unwrap(), parse_iso8601(end).unwrap())
    }

    #[test]
    fn test_range_inclusive() {
        let range = range("2024-01-15T00:00:00Z", "2024-01-16T00:00:00Z");
        assert!(range.contains(&parse_iso8601("2024-01-15T00:00:00Z").unwrap()));
        assert!(range.contains(&parse_iso8601("2024-01-16T00:00:00Z").unwrap()));
        assert!(!range.contains(&parse_iso8601("2024-01-16T00:00:01Z").unwrap()));
        assert!(!range.contains(&parse_iso8601("2024-01-14T23:59:59Z").unwrap()));
    }

    #[test]
    fn test_range_open_ends() {
        let end = parse_iso8601("2024-01-16T00:00:00Z").unwrap();
        let range = TimeRange::from_bounds(None, Some(end));
        assert!(range.contains(&parse_iso8601("1970-01-01T00:00:00Z").unwrap()));
        assert!(!range.contains(&parse_iso8601("2024-01-16T00:00:01Z").unwrap()));

        let range = TimeRange::from_bounds(Some(end), None);
        assert!(range.contains(&parse_iso8601("2100-01-01T00:00:00Z").unwrap()));
    }

    #[test]
    fn test_format_iso8601() {
        let dt = parse_iso8601("2024-03-01T18:05:09Z").unwrap();
        assert_eq!(format_iso8601(&dt), "2024-03-01T18:05:09Z");
    }
}
