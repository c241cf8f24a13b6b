use std::sync::Arc;
use std::time::Duration;

use boldlink_types::UrlRecord;

use crate::error::{Error, Result};
use crate::observer::{ApiObserver, NoopObserver, OperationEvent, Outcome};
use crate::schema::{ApiErrorBody, ApiUrlRecord, ShortenRequest, to_record};

pub const DEFAULT_BASE_URL: &str = "https://boldback.vercel.app";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const GENERIC_CREATE_FAILURE: &str = "Failed to shorten URL";

/// Client configuration: base URL for both requests and display links, plus
/// the request abort threshold.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// HTTP client for the shortening service.
///
/// Operations are not cancellable once issued; the configured timeout is
/// the only bound on an unresponsive call.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    observer: Arc<dyn ApiObserver>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_observer(config, Arc::new(NoopObserver))
    }

    pub fn with_observer(config: ClientConfig, observer: Arc<dyn ApiObserver>) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("base URL must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url,
            observer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /api/test`. Any 2xx body counts as alive.
    pub async fn test_connectivity(&self) -> Result<()> {
        const OPERATION: &str = "test_connectivity";
        let target = format!("{}/api/test", self.base_url);

        let response = self.http.get(&target).send().await.map_err(|err| {
            let detail = describe_transport_error(&err);
            self.failed(OPERATION, &target, None, &detail);
            Error::Connectivity {
                operation: OPERATION,
                status: None,
                detail,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            self.failed(OPERATION, &target, Some(status.as_u16()), "probe rejected");
            return Err(Error::Connectivity {
                operation: OPERATION,
                status: Some(status.as_u16()),
                detail: "liveness probe returned an error status".to_string(),
            });
        }

        self.succeeded(OPERATION, &target, Some(status.as_u16()));
        Ok(())
    }

    /// Fetch the full server catalog from `GET /api/urls`.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>> {
        const OPERATION: &str = "list_all";
        let target = format!("{}/api/urls", self.base_url);

        let response = self.http.get(&target).send().await.map_err(|err| {
            let detail = describe_transport_error(&err);
            self.failed(OPERATION, &target, None, &detail);
            Error::Fetch {
                operation: OPERATION,
                status: None,
                detail,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            self.failed(OPERATION, &target, Some(status.as_u16()), "listing rejected");
            return Err(Error::Fetch {
                operation: OPERATION,
                status: Some(status.as_u16()),
                detail: "listing returned an error status".to_string(),
            });
        }

        let records: Vec<ApiUrlRecord> = response.json().await.map_err(|err| {
            let detail = format!("malformed listing body: {}", err);
            self.failed(OPERATION, &target, Some(status.as_u16()), &detail);
            Error::Fetch {
                operation: OPERATION,
                status: Some(status.as_u16()),
                detail,
            }
        })?;

        self.succeeded(OPERATION, &target, Some(status.as_u16()));
        Ok(records.into_iter().map(to_record).collect())
    }

    /// Shorten one URL via `POST /shorten`.
    ///
    /// On error responses the service's `{"error": "..."}` message is
    /// carried verbatim; anything else gets the generic failure text.
    pub async fn create(&self, long_url: &str) -> Result<UrlRecord> {
        const OPERATION: &str = "create";
        let target = format!("{}/shorten", self.base_url);

        let response = self
            .http
            .post(&target)
            .json(&ShortenRequest { long_url })
            .send()
            .await
            .map_err(|err| {
                let detail = describe_transport_error(&err);
                self.failed(OPERATION, &target, None, &detail);
                Error::Creation {
                    message: GENERIC_CREATE_FAILURE.to_string(),
                    status: None,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_CREATE_FAILURE.to_string());
            self.failed(OPERATION, &target, Some(status.as_u16()), &message);
            return Err(Error::Creation {
                message,
                status: Some(status.as_u16()),
            });
        }

        let record: ApiUrlRecord = response.json().await.map_err(|err| {
            let detail = format!("service returned an unreadable record: {}", err);
            self.failed(OPERATION, &target, Some(status.as_u16()), &detail);
            Error::Creation {
                message: detail,
                status: Some(status.as_u16()),
            }
        })?;

        self.succeeded(OPERATION, &target, Some(status.as_u16()));
        Ok(to_record(record))
    }

    fn succeeded(&self, operation: &'static str, target: &str, status: Option<u16>) {
        self.observer.observe(OperationEvent {
            operation,
            target,
            outcome: Outcome::Success,
            status,
            detail: None,
        });
    }

    fn failed(&self, operation: &'static str, target: &str, status: Option<u16>, detail: &str) {
        self.observer.observe(OperationEvent {
            operation,
            target,
            outcome: Outcome::Failure,
            status,
            detail: Some(detail),
        });
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}
