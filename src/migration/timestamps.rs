//! `createdAt` decoding for both timestamp representations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Unix time of 2001-01-01T00:00:00Z, the epoch of the numeric legacy form
pub const REFERENCE_DATE_UNIX_SECONDS: i64 = 978_307_200;

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Rfc3339(DateTime<Utc>),
    ReferenceSeconds(f64),
}

/// Convert seconds since 2001-01-01T00:00:00Z to a UTC timestamp.
///
/// Returns `None` for values outside chrono's representable range or non-finite input.
pub fn from_reference_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0).round() as u32;
    let (whole, nanos) = if nanos >= 1_000_000_000 {
        (whole + 1.0, 0)
    } else {
        (whole, nanos)
    };
    if whole.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }
    let unix = (whole as i64).checked_add(REFERENCE_DATE_UNIX_SECONDS)?;
    DateTime::<Utc>::from_timestamp(unix, nanos)
}

/// `deserialize_with` helper accepting an RFC 3339 string or legacy reference seconds
pub fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredTimestamp::deserialize(deserializer)? {
        StoredTimestamp::Rfc3339(timestamp) => Ok(timestamp),
        StoredTimestamp::ReferenceSeconds(seconds) => from_reference_seconds(seconds)
            .ok_or_else(|| serde::de::Error::custom(format!("createdAt out of range: {}", seconds))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reference_epoch() {
        let epoch = from_reference_seconds(0.0).unwrap();
        assert_eq!(epoch, Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_fractional_seconds() {
        let ts = from_reference_seconds(1.5).unwrap();
        assert_eq!(ts.timestamp(), REFERENCE_DATE_UNIX_SECONDS + 1);
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_negative_seconds() {
        let ts = from_reference_seconds(-86_400.0).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2000, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(from_reference_seconds(f64::NAN).is_none());
        assert!(from_reference_seconds(f64::INFINITY).is_none());
        assert!(from_reference_seconds(1e300).is_none());
    }
}
