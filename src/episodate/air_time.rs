use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

use super::TimeFormatError;

/// The format episodate uses for `air_date`; it carries no zone and is read as UTC.
pub const EPISODATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An air date from the show API.
/// Depending on the endpoint the same field is either RFC 3339 or [`EPISODATE_FORMAT`],
/// so parsing tries both, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirTime(pub DateTime<Utc>);

impl AirTime {
    pub fn parse(value: &str) -> Result<AirTime, TimeFormatError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(AirTime(dt.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(value, EPISODATE_FORMAT)
            .map(|naive| AirTime(naive.and_utc()))
            .map_err(|_| TimeFormatError {
                input: value.to_owned(),
            })
    }
}

impl From<DateTime<Utc>> for AirTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<AirTime> for DateTime<Utc> {
    fn from(value: AirTime) -> Self {
        value.0
    }
}

impl std::ops::Deref for AirTime {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for AirTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(EPISODATE_FORMAT))
    }
}

pub(crate) struct DeserializeVisitor;

impl serde::de::Visitor<'_> for DeserializeVisitor {
    type Value = AirTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an RFC 3339 or \"YYYY-MM-DD HH:MM:SS\" date-time string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        AirTime::parse(value).map_err(E::custom)
    }
}

impl<'de> serde::Deserialize<'de> for AirTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DeserializeVisitor)
    }
}

impl serde::Serialize for AirTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}
