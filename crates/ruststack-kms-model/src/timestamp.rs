//! Timestamp type for KMS wire payloads.
//!
//! The KMS JSON protocol encodes timestamps (`CreationDate`, `DeletionDate`,
//! `ValidTo`, ...) as epoch seconds, usually with a fractional millisecond
//! part. `Timestamp` wraps [`chrono::DateTime<Utc>`] and performs that
//! conversion in its serde implementations.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time, encoded as fractional epoch seconds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build a timestamp from whole epoch seconds.
    ///
    /// Returns `None` if the value is outside the representable range.
    #[must_use]
    pub fn from_epoch_seconds(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Epoch seconds with millisecond precision, as sent on the wire.
    #[must_use]
    pub fn as_epoch_seconds_f64(&self) -> f64 {
        let millis = self.0.timestamp_millis();
        #[allow(clippy::cast_precision_loss)]
        {
            millis as f64 / 1000.0
        }
    }

    /// The wrapped UTC datetime.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_epoch_seconds_f64())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds as a number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        #[allow(clippy::cast_possible_truncation)]
        let millis = (v * 1000.0).round() as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Timestamp)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Timestamp::from_epoch_seconds(v)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .ok()
            .and_then(Timestamp::from_epoch_seconds)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {v}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_as_epoch_seconds() {
        let ts = Timestamp::from_epoch_seconds(1_700_000_000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1700000000.0");
    }

    #[test]
    fn test_should_deserialize_fractional_seconds() {
        let ts: Timestamp = serde_json::from_str("1700000000.5").unwrap();
        assert_eq!(ts.as_datetime().timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn test_should_deserialize_integer_seconds() {
        let ts: Timestamp = serde_json::from_str("1700000000").unwrap();
        assert_eq!(ts.as_datetime().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_should_roundtrip_millisecond_precision() {
        let ts: Timestamp = serde_json::from_str("1699999999.999").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
