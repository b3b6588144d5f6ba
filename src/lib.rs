//! Wick - share one-time secrets from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── api/              # Client for the one-time secret service
//! │   ├── mod           # Client and the remote operations
//! │   ├── model         # Metadata, lifecycle states, sharing URLs
//! │   └── wire          # serde records for the JSON envelope
//! ├── cli/              # Command-line interface
//! │   ├── put/get/gen   # Store, retrieve, generate
//! │   ├── burn/meta     # Destroy and inspect
//! │   ├── recent/status # Account listing and service health
//! │   ├── output        # Tab-separated and JSON rendering
//! │   ├── prompt        # Masked stdin reads for secrets
//! │   └── resolve       # Credential precedence (flag > env > file)
//! └── config            # ~/.config/wick/config.toml
//! ```
//!
//! # Features
//!
//! - One round trip per operation, nothing stored locally
//! - Secrets are readable exactly once, then gone
//! - Burn a secret before anyone reads it
//! - Scriptable output: tab-separated by default, `--json` for JSON

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
