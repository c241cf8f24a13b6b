//! Wire-shaped sample records for seeding slots and stub responses.

use serde_json::{Value, json};

/// One record as the service serializes it.
pub fn record(short_code: &str, long_url: &str, created_at: &str, visits: u64) -> Value {
    json!({
        "shortCode": short_code,
        "longUrl": long_url,
        "createdAt": created_at,
        "visits": visits,
    })
}

/// A record missing its short code, as an unconfirmed creation leaves it.
pub fn uncoded_record(long_url: &str, created_at: &str) -> Value {
    json!({
        "shortCode": "",
        "longUrl": long_url,
        "createdAt": created_at,
        "visits": 0,
    })
}

/// A catalog body for `GET /api/urls` or a slot file.
pub fn records(items: Vec<Value>) -> Value {
    Value::Array(items)
}
