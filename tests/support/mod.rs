//! Test support utilities for wick integration tests.
//!
//! Provides an isolated environment per test plus a canned-response HTTP
//! server, so no test ever touches the real service or the host machine's
//! credentials.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod server;

#[allow(unused_imports)]
pub use assertions::*;

use tempfile::TempDir;

/// Test environment with an isolated config directory.
///
/// `XDG_CONFIG_HOME` and `HOME` point into a temp dir and the wick env
/// vars start cleared, so the host machine's real config can never leak
/// into a test. No process-global state is mutated; tests run in parallel.
pub struct Test {
    /// Temporary config home
    pub config_home: TempDir,
    /// Extra environment for spawned commands
    env: Vec<(String, String)>,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        Self {
            config_home: TempDir::new().expect("failed to create temp config dir"),
            env: Vec::new(),
        }
    }

    /// Create a test environment with a config file holding credentials.
    pub fn with_credentials(username: &str, key: &str) -> Self {
        let t = Self::new();
        t.write_config(&format!("username = \"{username}\"\nkey = \"{key}\"\n"));
        t
    }

    /// Write the wick config file under the temp config dir.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.path().join("wick");
        std::fs::create_dir_all(&dir).expect("failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("failed to write config file");
    }

    /// Add an environment variable for spawned commands.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }
}
