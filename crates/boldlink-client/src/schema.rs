//! Wire shapes as the service actually sends them, kept separate from the
//! domain model. Optional fields are filled with defaults by the mapper.

use boldlink_types::UrlRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record shape returned by `POST /shorten` and `GET /api/urls`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUrlRecord {
    #[serde(default)]
    pub short_code: Option<String>,
    pub long_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub visits: Option<u64>,
}

/// Error payload shape: `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /shorten`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest<'a> {
    pub long_url: &'a str,
}

/// Map a wire record into the domain model, defaulting a missing creation
/// timestamp to the current instant and a missing counter to zero. An
/// unparseable timestamp is treated the same as a missing one.
pub fn to_record(api: ApiUrlRecord) -> UrlRecord {
    let created_at = api
        .created_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    UrlRecord {
        short_code: api.short_code.unwrap_or_default(),
        long_url: api.long_url,
        created_at,
        visits: api.visits.unwrap_or(0),
    }
}
