/// Document ids are caller-visible strings: UUID v4 for generated rows,
/// human-readable slugs (e.g. `golf-gti-2025`) for seeded content.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh document id (hyphenated UUID v4).
pub fn new_doc_id() -> DocId {
    uuid::Uuid::new_v4().to_string()
}

/// Parse a timestamp sent by the front-end.
///
/// Accepts RFC 3339 (`2025-01-15T00:00:00Z`, any offset) as well as naive
/// ISO 8601 date-times and plain dates, which are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `#[serde(deserialize_with = ...)]` adapter around [`parse_timestamp`].
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}
