//! End-to-end reconciliation scenarios over wire-shaped records.

use boldlink_engine::{UncodedPolicy, reconcile, search};
use boldlink_types::{RecordSource, UrlRecord};

const BASE: &str = "https://boldback.vercel.app";

fn record(json: &str) -> UrlRecord {
    serde_json::from_str(json).expect("valid record json")
}

#[test]
fn test_server_record_supersedes_stale_local_copy() {
    let server = vec![record(
        r#"{"shortCode":"abc","longUrl":"https://a.com","createdAt":"2024-01-02T00:00:00Z"}"#,
    )];
    let local = vec![record(
        r#"{"shortCode":"abc","longUrl":"https://stale.com","createdAt":"2024-01-01T00:00:00Z"}"#,
    )];

    let merged = reconcile(&server, &local, UncodedPolicy::Keep);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].record.long_url, "https://a.com");
    assert_eq!(merged[0].source, RecordSource::Server);
}

#[test]
fn test_local_record_survives_empty_server_catalog() {
    let local = vec![record(
        r#"{"shortCode":"xyz","longUrl":"https://b.com","createdAt":"2024-02-01T00:00:00Z"}"#,
    )];

    let merged = reconcile(&[], &local, UncodedPolicy::Keep);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, RecordSource::Local);
    assert_eq!(merged[0].record.short_code, "xyz");
}

#[test]
fn test_stale_local_visit_count_yields_to_server() {
    // The optimistic local bump (visits=5) loses to the fetched server
    // count once the service has recorded the visit.
    let server = vec![record(
        r#"{"shortCode":"abc","longUrl":"https://a.com","createdAt":"2024-01-02T00:00:00Z","visits":6}"#,
    )];
    let local = vec![record(
        r#"{"shortCode":"abc","longUrl":"https://a.com","createdAt":"2024-01-02T00:00:00Z","visits":5}"#,
    )];

    let merged = reconcile(&server, &local, UncodedPolicy::Keep);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].record.visits, 6);
}

#[test]
fn test_filter_over_reconciled_catalog() {
    let server = vec![
        record(r#"{"shortCode":"abc","longUrl":"https://example.com/foo","createdAt":"2024-01-02T00:00:00Z"}"#),
        record(r#"{"shortCode":"def","longUrl":"https://other.com","createdAt":"2024-01-03T00:00:00Z"}"#),
    ];
    let local = vec![record(
        r#"{"shortCode":"ghi","longUrl":"https://example.com/foo/deep","createdAt":"2024-01-04T00:00:00Z"}"#,
    )];

    let merged = reconcile(&server, &local, UncodedPolicy::Keep);
    let matches = search::filter(&merged, "FOO", BASE).expect("active filter");

    assert_eq!(matches.len(), 2);
    // Input (reconciled) order is preserved: newest first.
    assert_eq!(matches[0].record.short_code, "ghi");
    assert_eq!(matches[1].record.short_code, "abc");
}
