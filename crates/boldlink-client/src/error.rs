use std::fmt;

/// Result type for boldlink-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer.
///
/// Every variant carries the target operation and, when a response was
/// received, the HTTP status code, so callers can tell a connectivity
/// failure from a per-call failure.
#[derive(Debug)]
pub enum Error {
    /// Liveness probe failed; the service is unreachable
    Connectivity {
        operation: &'static str,
        status: Option<u16>,
        detail: String,
    },

    /// Listing failed; callers degrade to "no remote records"
    Fetch {
        operation: &'static str,
        status: Option<u16>,
        detail: String,
    },

    /// Creation failed; the message is user-facing and, when the service
    /// supplied an error payload, carried verbatim
    Creation {
        message: String,
        status: Option<u16>,
    },

    /// Client configuration problem (bad base URL, unbuildable HTTP client)
    Config(String),
}

impl Error {
    pub fn operation(&self) -> &'static str {
        match self {
            Error::Connectivity { operation, .. } | Error::Fetch { operation, .. } => operation,
            Error::Creation { .. } => "create",
            Error::Config(_) => "configure",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Connectivity { status, .. }
            | Error::Fetch { status, .. }
            | Error::Creation { status, .. } => *status,
            Error::Config(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connectivity {
                operation,
                status,
                detail,
            }
            | Error::Fetch {
                operation,
                status,
                detail,
            } => match status {
                Some(code) => write!(f, "{} failed with HTTP {}: {}", operation, code, detail),
                None => write!(f, "{} failed: {}", operation, detail),
            },
            // User-facing; shown verbatim, status stays programmatic.
            Error::Creation { message, .. } => write!(f, "{}", message),
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
