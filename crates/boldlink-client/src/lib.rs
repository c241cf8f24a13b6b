//! Remote catalog client for the Bold URL-shortening service.
//!
//! Three operations, each a thin request/response mapping with a fixed
//! timeout: `test_connectivity` (liveness probe), `list_all` (full catalog),
//! and `create` (shorten one URL). Callers must treat a failed listing as
//! "zero remote records", never as fatal.

mod api;
mod error;
mod observer;
mod schema;

pub use api::{ApiClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::{Error, Result};
pub use observer::{ApiObserver, NoopObserver, OperationEvent, Outcome};
