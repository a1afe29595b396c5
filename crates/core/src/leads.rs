//! Lead lifecycle vocabulary.
//!
//! Status and source are stored as free text; the constants below are the
//! values the front-end uses and the ones the stats endpoint breaks out.
//! Any other string is accepted and persisted as-is.

/// Source recorded when the form does not send one.
pub const DEFAULT_SOURCE: &str = "hero-form";

pub const STATUS_NEW: &str = "new";
pub const STATUS_CONTACTED: &str = "contacted";
pub const STATUS_CONVERTED: &str = "converted";

/// Serde default helper for the `source` field of lead payloads.
pub fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Count of leads in `status`, looked up in `(status, count)` rows.
///
/// Statuses missing from the rows count as zero.
pub fn count_for_status(rows: &[(String, i64)], status: &str) -> i64 {
    rows.iter()
        .filter(|(s, _)| s == status)
        .map(|(_, count)| *count)
        .sum()
}
