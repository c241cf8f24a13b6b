use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One shortening result, as persisted in the local slot and returned by the
/// service. Wire field names are camelCase to match the service's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    /// Unique identifier assigned by the service. Empty for local records
    /// the service never confirmed.
    #[serde(default)]
    pub short_code: String,

    /// The original submitted URL.
    pub long_url: String,

    /// When the record was created. Defaulted to the creation instant at the
    /// client boundary when the service omits it.
    pub created_at: DateTime<Utc>,

    /// Visit counter. Locally tracked values may lag the server's.
    #[serde(default)]
    pub visits: u64,
}

impl UrlRecord {
    pub fn has_short_code(&self) -> bool {
        !self.short_code.is_empty()
    }
}

/// Provenance of a reconciled record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Server,
    Local,
}

/// A record plus its provenance tag. Only exists on reconciled output; the
/// local slot persists bare `UrlRecord` sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub record: UrlRecord,
    pub source: RecordSource,
}

impl CatalogEntry {
    pub fn new(record: UrlRecord, source: RecordSource) -> Self {
        Self { record, source }
    }
}

/// Build the fully-qualified display URL for a short code.
pub fn display_url(base_url: &str, short_code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_code)
}
