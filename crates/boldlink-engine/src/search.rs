use boldlink_types::{CatalogEntry, display_url};

/// Narrow a reconciled catalog by a search term.
///
/// Returns `None` when the trimmed term is empty, meaning "no active
/// filter, show the unfiltered list" - a distinct state from an empty
/// result. Otherwise matches case-insensitively against the long URL, the
/// short code, or the fully-qualified display URL, preserving input order.
pub fn filter(
    entries: &[CatalogEntry],
    term: &str,
    base_url: &str,
) -> Option<Vec<CatalogEntry>> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    Some(
        entries
            .iter()
            .filter(|entry| matches_term(entry, &needle, base_url))
            .cloned()
            .collect(),
    )
}

fn matches_term(entry: &CatalogEntry, needle: &str, base_url: &str) -> bool {
    let record = &entry.record;
    record.long_url.to_lowercase().contains(needle)
        || record.short_code.to_lowercase().contains(needle)
        || display_url(base_url, &record.short_code)
            .to_lowercase()
            .contains(needle)
}
