use crate::error::{Error, Result};
use url::Url;

/// Validate a long URL before it is submitted to the service.
///
/// Rejects empty input, anything the URL parser refuses, and non-http(s)
/// schemes. Validation failures never reach the network.
pub fn validate_long_url(input: &str) -> Result<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("please enter a URL".to_string()));
    }

    let parsed = Url::parse(trimmed).map_err(|_| {
        Error::Validation("please enter a valid URL (include http:// or https://)".to_string())
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Validation(format!(
            "unsupported URL scheme '{}' (use http or https)",
            other
        ))),
    }
}
