pub mod error;
pub mod record;
pub mod validate;

pub use error::{Error, Result};
pub use record::{CatalogEntry, RecordSource, UrlRecord, display_url};
pub use validate::validate_long_url;
