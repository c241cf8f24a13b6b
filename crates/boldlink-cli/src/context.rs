use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use boldlink_client::{ApiClient, ClientConfig};
use boldlink_store::{LocalStore, resolve_data_dir};

use crate::args::Cli;
use crate::config::Config;
use crate::observer::StderrObserver;

/// Resolved runtime environment for one command invocation.
///
/// The effective base URL and timeout are fixed here once; flag beats
/// environment beats config file beats built-in default.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub base_url: String,
    pub timeout_ms: u64,
    pub verbose: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_dir(cli.data_dir.as_deref());
        let config = Config::load_from(&data_dir.join("config.toml"))?;

        let base_url = cli
            .api_url
            .clone()
            .or_else(|| std::env::var("BOLDLINK_API_URL").ok())
            .unwrap_or_else(|| config.base_url.clone())
            .trim_end_matches('/')
            .to_string();

        let timeout_ms = cli.timeout_ms.unwrap_or(config.timeout_ms);

        Ok(Self {
            data_dir,
            config,
            base_url,
            timeout_ms,
            verbose: cli.verbose,
        })
    }

    pub fn store(&self) -> LocalStore {
        LocalStore::open(&self.data_dir)
    }

    pub fn client(&self) -> Result<ApiClient> {
        let config = ClientConfig {
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
        };

        let client = if self.verbose {
            ApiClient::with_observer(config, Arc::new(StderrObserver))?
        } else {
            ApiClient::new(config)?
        };
        Ok(client)
    }
}
