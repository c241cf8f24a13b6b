//! Local persistence for boldlink.
//!
//! A single named slot file holds the sequence of locally created
//! `UrlRecord`s. The slot is the fallback source of truth when the remote
//! service is unreachable, so every operation here degrades instead of
//! failing: a missing or malformed slot reads as empty, and write failures
//! are swallowed.

mod paths;
mod slot;

pub use paths::resolve_data_dir;
pub use slot::{LocalStore, SLOT_FILE};
