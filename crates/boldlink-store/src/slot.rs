use std::path::{Path, PathBuf};

use boldlink_types::UrlRecord;

/// File name of the slot inside the data directory.
pub const SLOT_FILE: &str = "shortened_urls.json";

/// Read/write access to the local slot of shortened URLs.
///
/// Only ever invoked from a single logical thread of control, so the
/// read-modify-write operations take no locks.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SLOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the slot. Returns an empty sequence when the file is absent,
    /// unreadable, or malformed.
    pub fn load(&self) -> Vec<UrlRecord> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist the slot. Best-effort: quota and permission failures are
    /// swallowed and the caller continues with its in-memory state.
    pub fn save(&self, records: &[UrlRecord]) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(content) = serde_json::to_string_pretty(records) {
            let _ = std::fs::write(&self.path, content);
        }
    }

    /// Prepend a newly created record to the slot.
    pub fn append(&self, record: UrlRecord) {
        let mut records = self.load();
        records.insert(0, record);
        self.save(&records);
    }

    /// Optimistically bump the visit counter of a local record.
    ///
    /// Returns the new count, or `None` when no local record carries the
    /// code (server-only records have nothing to update here; the service
    /// counts those visits itself).
    pub fn record_visit(&self, short_code: &str) -> Option<u64> {
        if short_code.is_empty() {
            return None;
        }

        let mut records = self.load();
        let hit = records.iter_mut().find(|r| r.short_code == short_code)?;
        hit.visits += 1;
        let visits = hit.visits;
        self.save(&records);
        Some(visits)
    }
}
