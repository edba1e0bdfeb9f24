use crate::errors::Error;
use chrono::{
    DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeDelta, TimeZone, Utc,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of milliseconds in a day
pub const DAY_MS: i64 = 86_400_000;

/// One day.  Bookings are inclusive of both their first and last day, so
/// two ranges are adjacent (no gap, no overlap) when one ends exactly one
/// day before the other starts.
pub const DAY: TimeDelta = TimeDelta::milliseconds(DAY_MS);

/// A range of days [start; end] including both ends.
///
/// Either bound is None when it was missing or could not be parsed.  Such
/// a range is invalid, and every operation on it fails closed.
/// No ordering is enforced between the two bounds: a reversed range can be
/// built, and each operation decides what to do with it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct DateRange {
    #[serde(rename = "startDate", default, with = "lenient")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(rename = "endDate", default, with = "lenient")]
    pub end_date: Option<DateTime<Utc>>,
}

impl DateRange {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DateRange {
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    /// A range from midnight (UTC) of `start` to midnight of `end`
    #[must_use]
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange::new(midnight(start), midnight(end))
    }

    /// Parse both bounds, failing on the first one that is not a valid date.
    pub fn parse(start: &str, end: &str) -> Result<Self, Error> {
        Ok(DateRange::new(parse_instant(start)?, parse_instant(end)?))
    }

    /// Build a range from optional text fields, as received from a caller.
    /// Missing or malformed fields result in an invalid range rather than
    /// an error.
    #[must_use]
    pub fn from_fields(start: Option<&str>, end: Option<&str>) -> Self {
        DateRange {
            start_date: start.and_then(parse_lenient),
            end_date: end.and_then(parse_lenient),
        }
    }

    /// Whether both bounds are known
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Both bounds, or the name of the first missing one
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), Error> {
        let start = self.start_date.ok_or(Error::MissingDate("startDate"))?;
        let end = self.end_date.ok_or(Error::MissingDate("endDate"))?;
        Ok((start, end))
    }

    /// Time elapsed between the two bounds (negative for a reversed range)
    #[must_use]
    pub fn duration(&self) -> Option<TimeDelta> {
        self.bounds().ok().map(|(start, end)| end - start)
    }

    /// Number of days covered, counting both the first and last day.
    /// None for invalid or reversed ranges.
    #[must_use]
    pub fn days(&self) -> Option<i64> {
        let (start, end) = self.bounds().ok()?;
        if end < start {
            None
        } else {
            Some((end.date_naive() - start.date_naive()).num_days() + 1)
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds() {
            Err(_) => write!(f, "invalid"),
            Ok((start, end)) => write!(
                f,
                "[{}, {}]",
                format_instant(&start),
                format_instant(&end)
            ),
        }
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Parse either a plain date (`2024-01-31`, taken as midnight UTC) or a full
/// RFC 3339 timestamp.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>, Error> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(midnight(date));
    }
    DateTime::parse_from_rfc3339(text)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| Error::InvalidDate(text.to_string()))
}

fn parse_lenient(text: &str) -> Option<DateTime<Utc>> {
    parse_instant(text)
        .map_err(|e| debug!("ignoring date field: {e}"))
        .ok()
}

/// Dates at midnight are shown without their time component
#[must_use]
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    if instant.time() == NaiveTime::MIN {
        instant.format("%Y-%m-%d").to_string()
    } else {
        instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Serialization of the bounds.  Reading accepts text dates as well as
/// milliseconds since the epoch; anything else becomes a missing bound.
mod lenient {
    use super::{format_instant, parse_lenient};
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
        Other(IgnoredAny),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.as_ref().map(format_instant).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Other(_)) => None,
            Some(Raw::Millis(ms)) => Utc.timestamp_millis_opt(ms).single(),
            Some(Raw::Text(text)) => parse_lenient(&text),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        let r = DateRange::parse("2024-01-01", "2024-01-10").unwrap();
        assert_eq!(r, DateRange::from_days(ymd(2024, 1, 1), ymd(2024, 1, 10)));
        assert_eq!(r.start_date.unwrap().timestamp_millis(), 1_704_067_200_000);

        let r = DateRange::parse("2024-01-01T12:00:00+02:00", "2024-01-02")
            .unwrap();
        assert_eq!(
            r.start_date.unwrap().timestamp_millis(),
            1_704_067_200_000 + 10 * 3_600_000
        );

        assert_eq!(
            DateRange::parse("2024-13-01", "2024-01-02"),
            Err(Error::InvalidDate("2024-13-01".to_string()))
        );
        assert_eq!(
            DateRange::parse("2024-01-01", ""),
            Err(Error::InvalidDate(String::new()))
        );
    }

    #[test]
    fn test_from_fields() {
        let r = DateRange::from_fields(Some("2024-01-01"), None);
        assert!(r.start_date.is_some());
        assert!(!r.is_valid());
        assert_eq!(r.bounds(), Err(Error::MissingDate("endDate")));

        let r = DateRange::from_fields(Some("garbage"), Some("2024-01-01"));
        assert!(!r.is_valid());
        assert_eq!(r.bounds(), Err(Error::MissingDate("startDate")));

        let r = DateRange::from_fields(Some("2024-01-01"), Some("2024-01-01"));
        assert!(r.is_valid());

        // No ordering is enforced at construction
        let r = DateRange::from_fields(Some("2024-01-10"), Some("2024-01-01"));
        assert!(r.is_valid());
        assert_eq!(r.days(), None);
    }

    #[test]
    fn test_days() {
        let r = DateRange::from_days(ymd(2024, 1, 1), ymd(2024, 1, 10));
        assert_eq!(r.days(), Some(10));
        assert_eq!(r.duration(), Some(TimeDelta::days(9)));

        let single = DateRange::from_days(ymd(2024, 2, 29), ymd(2024, 2, 29));
        assert_eq!(single.days(), Some(1));
        assert_eq!(DateRange::default().days(), None);
        assert_eq!(DateRange::default().duration(), None);
        assert_eq!(DAY.num_milliseconds(), DAY_MS);
        assert_eq!(DAY, TimeDelta::days(1));
    }

    #[test]
    fn test_display() {
        let r = DateRange::from_days(ymd(2024, 1, 1), ymd(2024, 1, 10));
        assert_eq!(r.to_string(), "[2024-01-01, 2024-01-10]");

        let r = DateRange::parse("2024-01-01T06:30:00Z", "2024-01-02").unwrap();
        assert_eq!(r.to_string(), "[2024-01-01T06:30:00.000Z, 2024-01-02]");

        assert_eq!(DateRange::default().to_string(), "invalid");
    }

    #[test]
    fn test_json() {
        let r = DateRange::from_days(ymd(2024, 1, 1), ymd(2024, 1, 10));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"startDate":"2024-01-01","endDate":"2024-01-10"}"#);
        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), r);

        // Milliseconds since the epoch are accepted too
        let r2: DateRange = serde_json::from_str(
            r#"{"startDate":1704067200000,"endDate":"2024-01-10"}"#,
        )
        .unwrap();
        assert_eq!(r2, r);

        // Malformed or missing fields give an invalid range, not an error
        let bad: DateRange = serde_json::from_str(
            r#"{"startDate":"not a date","endDate":true}"#,
        )
        .unwrap();
        assert_eq!(bad, DateRange::default());

        let partial: DateRange =
            serde_json::from_str(r#"{"endDate":"2024-01-10"}"#).unwrap();
        assert_eq!(partial.start_date, None);
        assert_eq!(partial.end_date, r.end_date);

        let json = serde_json::to_string(&partial).unwrap();
        assert_eq!(json, r#"{"startDate":null,"endDate":"2024-01-10"}"#);
    }
}
