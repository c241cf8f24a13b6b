//! TestWorld pattern for declarative integration test setup.
//!
//! Provides an isolated data directory, environment plumbing toward a
//! `StubServer` (or a dead endpoint when none is attached), and a
//! configured CLI runner.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::server::StubServer;

/// Address nothing listens on, so worlds without a stub server exercise the
/// offline paths instead of reaching the real service.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    server: Option<StubServer>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".boldlink");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            server: None,
        }
    }

    /// Attach a stub service; CLI runs are pointed at it.
    pub fn with_server(mut self, server: StubServer) -> Self {
        self.server = Some(server);
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn server(&self) -> Option<&StubServer> {
        self.server.as_ref()
    }

    /// The endpoint CLI runs are pointed at.
    pub fn api_url(&self) -> &str {
        self.server
            .as_ref()
            .map(|s| s.base_url())
            .unwrap_or(DEAD_ENDPOINT)
    }

    /// Path of the local slot file inside the data directory.
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join("shortened_urls.json")
    }

    /// Seed the local slot with wire-shaped records.
    pub fn seed_local(&self, records: &serde_json::Value) -> Result<()> {
        std::fs::write(self.slot_path(), serde_json::to_string_pretty(records)?)?;
        Ok(())
    }

    /// Read the local slot back as JSON.
    pub fn read_slot(&self) -> Result<serde_json::Value> {
        let content = std::fs::read_to_string(self.slot_path())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write a config.toml into the data directory.
    pub fn write_config(&self, contents: &str) -> Result<()> {
        std::fs::write(self.data_dir.join("config.toml"), contents)?;
        Ok(())
    }

    /// Execute the CLI with this world's data dir and endpoint.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("boldlink")
            .map_err(|e| anyhow::anyhow!("Failed to find boldlink binary: {}", e))?;

        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env("BOLDLINK_API_URL", self.api_url());
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
