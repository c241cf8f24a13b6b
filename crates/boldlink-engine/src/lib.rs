//! Catalog reconciliation and search.
//!
//! Both entry points are pure functions over explicit inputs: the merged
//! view is recomputed from the two source sequences on every use, so there
//! is no shared mutable cache to go stale.

mod reconcile;
pub mod search;

pub use reconcile::{UncodedPolicy, reconcile};
