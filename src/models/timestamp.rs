use super::error::AppError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Zone-less layouts, read in the local zone. `%.f` also matches an absent fraction.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a point timestamp.
///
/// Accepts RFC 3339 (`2025-10-04T12:30:00Z`, `2025-10-04T13:30:00+01:00`),
/// zone-less date-times (`2025-10-04 12:30:00`, local time), and bare dates
/// (`2025-10-04`, midnight UTC). This matches how a browser `Date` reads the
/// same strings.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, AppError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return local_to_utc(&naive);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| AppError::ParseError(format!("Unrecognised timestamp: {input}")))
}

/// Resolves a wall-clock time in the local zone.
///
/// An ambiguous time (clocks going back) takes the earlier instant. A time
/// skipped by a forward transition does not exist and is rejected.
pub fn local_to_utc(naive: &NaiveDateTime) -> Result<DateTime<Utc>, AppError> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| AppError::ParseError(format!("Nonexistent local time: {naive}")))
}

/// Converts epoch milliseconds into a timestamp.
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::ParseError(format!("Timestamp out of range: {millis}")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

/// Drops the sub-millisecond part. Out-of-range values saturate, which
/// `from_epoch_millis` then rejects.
#[allow(clippy::cast_possible_truncation)]
fn truncate_millis(millis: f64) -> i64 {
    millis.trunc() as i64
}

/// Serde adapter for point timestamps given as text or epoch milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(millis) => from_epoch_millis(millis),
        RawTimestamp::FractionalMillis(millis) => from_epoch_millis(truncate_millis(millis)),
        RawTimestamp::Text(text) => parse_timestamp(&text),
    };

    parsed.map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2025-10-04T13:30:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 10, 4, 12, 30, 0).unwrap());
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_parse_naive_formats_as_local_time() {
        let expected = local(2025, 10, 4, 12, 30);
        assert_eq!(parse_timestamp("2025-10-04T12:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-10-04 12:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-10-04 12:30").unwrap(), expected);
    }

    #[test]
    fn test_naive_and_explicit_zone_agree() {
        let naive = parse_timestamp("2025-10-04T12:30:00").unwrap();
        let offset = naive.with_timezone(&Local).format("%:z").to_string();
        let explicit = parse_timestamp(&format!("2025-10-04T12:30:00{offset}")).unwrap();
        assert_eq!(naive, explicit);
    }

    #[test]
    fn test_fractional_epoch_millis_deserialize() {
        let point: Wrapped = serde_json::from_str(r#"{ "x": 1759539600000.75 }"#).unwrap();
        assert_eq!(point.x, Utc.with_ymd_and_hms(2025, 10, 4, 1, 0, 0).unwrap());

        let whole: Wrapped = serde_json::from_str(r#"{ "x": 1759539600000 }"#).unwrap();
        assert_eq!(whole.x, point.x);

        assert!(serde_json::from_str::<Wrapped>(r#"{ "x": 1e300 }"#).is_err());
    }

    #[derive(Deserialize)]
    struct Wrapped {
        #[serde(deserialize_with = "deserialize")]
        x: DateTime<Utc>,
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let parsed = parse_timestamp(" 2025-10-04 ").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 10, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_epoch_millis() {
        let parsed = from_epoch_millis(1_759_536_000_000).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 10, 4, 0, 0, 0).unwrap());
        assert!(from_epoch_millis(i64::MAX).is_err());
    }
}
