//! Date helpers shared by the API models and the query parameter parser

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are normalized to UTC before the date part is taken, so
/// `2024-03-01T23:30:00-02:00` becomes `2024-03-02`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Parse an instant from `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for `Option<NaiveDate>` accepting either date or timestamp strings
///
/// Serializes as `YYYY-MM-DD`; `null` and missing values become `None`.
pub mod flexible_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => s.serialize_some(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(d)? {
            Some(raw) => super::parse_date(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw))),
            None => Ok(None),
        }
    }
}

/// Tri-state field: absent -> `None`, `null` -> `Some(None)`, value -> `Some(Some(v))`
///
/// Use with `#[serde(default, deserialize_with = "...")]`; serde only calls
/// the function when the key is present.
pub mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(d).map(Some)
    }
}

/// [`nullable`] for dates in the [`flexible_date`] formats
pub mod nullable_date {
    use chrono::NaiveDate;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<Option<NaiveDate>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::flexible_date::serialize(&date.flatten(), s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::flexible_date::deserialize(d).map(Some)
    }
}

/// Optional field that may be omitted but not sent as `null`
pub mod non_null {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(d).map(Some)
    }
}

/// [`non_null`] for dates in the [`flexible_date`] formats
pub mod non_null_date {
    use chrono::NaiveDate;
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::flexible_date::serialize(date, s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match super::flexible_date::deserialize(d)? {
            Some(date) => Ok(Some(date)),
            None => Err(de::Error::custom("date must not be null")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_date(" 2024-01-15 "),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_parse_timestamp_uses_utc_date() {
        assert_eq!(
            parse_date("2024-01-15T10:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_date("2024-03-01T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_instant() {
        let midnight = parse_instant("2024-01-15").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        let noon = parse_instant("2024-01-15T14:00:00+02:00").unwrap();
        assert_eq!(noon.to_rfc3339(), "2024-01-15T12:00:00+00:00");

        assert_eq!(parse_instant("15/01/2024"), None);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable::deserialize")]
        note: Option<Option<String>>,
        #[serde(default, deserialize_with = "nullable_date::deserialize")]
        born: Option<Option<NaiveDate>>,
        #[serde(default, deserialize_with = "non_null::deserialize")]
        name: Option<String>,
        #[serde(default, deserialize_with = "non_null_date::deserialize")]
        joined: Option<NaiveDate>,
    }

    #[test]
    fn test_nullable_distinguishes_absent_and_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.note, None);
        assert_eq!(absent.born, None);
        assert_eq!(absent.name, None);

        let cleared: Patch = serde_json::from_str(r#"{"note": null, "born": null}"#).unwrap();
        assert_eq!(cleared.note, Some(None));
        assert_eq!(cleared.born, Some(None));

        let set: Patch =
            serde_json::from_str(r#"{"note": "x", "born": "1990-05-20", "joined": "2020-01-01"}"#)
                .unwrap();
        assert_eq!(set.note, Some(Some("x".to_string())));
        assert_eq!(set.born, Some(NaiveDate::from_ymd_opt(1990, 5, 20)));
        assert_eq!(set.joined, NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn test_non_null_rejects_null() {
        assert!(serde_json::from_str::<Patch>(r#"{"name": null}"#).is_err());
        assert!(serde_json::from_str::<Patch>(r#"{"joined": null}"#).is_err());
        assert!(serde_json::from_str::<Patch>(r#"{"born": "not-a-date"}"#).is_err());
    }
}
