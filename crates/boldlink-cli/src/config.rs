use std::path::Path;

use anyhow::Result;
use boldlink_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use boldlink_engine::UncodedPolicy;
use serde::{Deserialize, Serialize};

/// Delay before the post-creation catalog re-fetch. A race-avoidance
/// heuristic, not a consistency barrier.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 1_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_ms: u64,
    pub refresh_delay_ms: u64,
    pub uncoded: UncodedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            uncoded: UncodedPolicy::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.uncoded, UncodedPolicy::Keep);
        Ok(())
    }

    #[test]
    fn test_partial_config_keeps_defaults_for_rest() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "refresh_delay_ms = 25\nuncoded = \"drop\"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.refresh_delay_ms, 25);
        assert_eq!(config.uncoded, UncodedPolicy::Drop);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        Ok(())
    }
}
