use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Deserialize a backend timestamp into an OffsetDateTime.
///
/// The backend emits ISO-8601 timestamps both with an offset (RFC 3339) and
/// without one (SQLite rows and `datetime.now().isoformat()`). Timestamps
/// without an offset are taken as UTC.
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

/// Serialize an OffsetDateTime into an RFC 3339 formatted string.
pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = datetime
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&s)
}

fn parse(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    match OffsetDateTime::parse(s, &Rfc3339) {
        Ok(dt) => Ok(dt),
        Err(err) => {
            // SQLite rows separate date and time with a space.
            let normalized = s.replacen(' ', "T", 1);
            match PrimitiveDateTime::parse(&normalized, &Iso8601::DEFAULT) {
                Ok(dt) => Ok(dt.assume_utc()),
                Err(_) => Err(err),
            }
        }
    }
}

/// Serde adapter for optional timestamp fields.
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => super::parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    pub fn serialize<S>(
        datetime: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match datetime {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }
}
