//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a wick command with the isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME set to the temporary config directory
    /// - WICK_* variables cleared, then any test-specific ones applied
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("wick").expect("failed to find wick binary");
        cmd.env_remove("WICK_USERNAME")
            .env_remove("WICK_KEY")
            .env_remove("WICK_HOST")
            .env_remove("WICK_LOG")
            .env("HOME", self.config_home.path())
            // Windows uses USERPROFILE instead of HOME for home directory
            .env("USERPROFILE", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path());
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        cmd
    }

    /// Run a wick command without touching the network.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().expect("failed to run wick")
    }

    /// Run a wick command against a specific service host.
    pub fn run_at(&self, host: &str, args: &[&str]) -> Output {
        self.cmd()
            .env("WICK_HOST", host)
            .args(args)
            .output()
            .expect("failed to run wick")
    }

    /// Run a wick command against a specific host with stdin piped in.
    pub fn run_at_with_stdin(&self, host: &str, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .env("WICK_HOST", host)
            .args(args)
            .write_stdin(stdin.to_string())
            .output()
            .expect("failed to run wick")
    }
}
