//! Gen command.
//!
//! Have the service pick a short secret value.

use serde::Serialize;
use tracing::info;

use crate::api::Client;
use crate::cli::output::{self, OutputFormat, Tabular};
use crate::cli::prompt;
use crate::error::Result;

#[derive(Serialize)]
struct Generated {
    value: String,
    secret_key: String,
    metadata_key: String,
    secret_url: String,
}

impl Tabular for Generated {
    fn row(&self) -> Vec<String> {
        vec![
            self.value.clone(),
            self.secret_key.clone(),
            self.metadata_key.clone(),
            self.secret_url.clone(),
        ]
    }
}

/// Generate and print a secret.
pub fn execute(
    client: &Client,
    format: OutputFormat,
    passphrase: Option<String>,
    ttl: u64,
    recipient: &str,
) -> Result<()> {
    let passphrase = prompt::passphrase(passphrase)?;
    let (value, meta) = client.generate(&passphrase, ttl, recipient)?;
    info!(metadata_key = %meta.metadata_key, "generated secret");

    let result = Generated {
        value,
        secret_url: meta.secret_url()?.to_string(),
        secret_key: meta.secret_key,
        metadata_key: meta.metadata_key,
    };
    output::print(&result, format)
}
