use std::collections::HashMap;

use boldlink_types::{CatalogEntry, RecordSource, UrlRecord};
use serde::{Deserialize, Serialize};

/// What to do with local records that never received a short code from the
/// service (e.g. the create response shape changed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UncodedPolicy {
    /// Keep them in the merged view under a distinct synthetic identity.
    #[default]
    Keep,
    /// Exclude them from reconciliation entirely.
    Drop,
}

/// Merge server and local record sets into one display list.
///
/// Server records are inserted first; a local record joins only when its
/// short code is not already taken. A server and local record sharing a
/// code collapse to the server record entirely, never field by field.
/// Output is ordered by creation time descending; ties keep insertion
/// order (server before local).
///
/// Records with an empty short code never enter the code map: each one is
/// its own synthetic identity, so two code-less records are never
/// collapsed into one.
pub fn reconcile(
    server: &[UrlRecord],
    local: &[UrlRecord],
    policy: UncodedPolicy,
) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(server.len() + local.len());
    let mut index_by_code: HashMap<String, usize> = HashMap::new();

    for record in server {
        insert(&mut entries, &mut index_by_code, record, RecordSource::Server, policy);
    }
    for record in local {
        insert(&mut entries, &mut index_by_code, record, RecordSource::Local, policy);
    }

    // Vec::sort_by is stable, so equal timestamps keep insertion order.
    entries.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
    entries
}

fn insert(
    entries: &mut Vec<CatalogEntry>,
    index_by_code: &mut HashMap<String, usize>,
    record: &UrlRecord,
    source: RecordSource,
    policy: UncodedPolicy,
) {
    if !record.has_short_code() {
        if policy == UncodedPolicy::Drop && source == RecordSource::Local {
            return;
        }
        entries.push(CatalogEntry::new(record.clone(), source));
        return;
    }

    match index_by_code.get(&record.short_code) {
        // A later server record with the same code replaces the earlier one.
        Some(&at) if source == RecordSource::Server => {
            entries[at] = CatalogEntry::new(record.clone(), RecordSource::Server);
        }
        // Server entries are never overwritten; among local duplicates the
        // first one in wins.
        Some(_) => {}
        None => {
            index_by_code.insert(record.short_code.clone(), entries.len());
            entries.push(CatalogEntry::new(record.clone(), source));
        }
    }
}
