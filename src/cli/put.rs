//! Put command.
//!
//! Store a secret and print its keys and sharing link.

use serde::Serialize;
use tracing::info;

use crate::api::Client;
use crate::cli::output::{self, OutputFormat, Tabular};
use crate::cli::prompt;
use crate::error::Result;

#[derive(Serialize)]
struct Stored {
    secret_key: String,
    metadata_key: String,
    secret_url: String,
}

impl Tabular for Stored {
    fn row(&self) -> Vec<String> {
        vec![
            self.secret_key.clone(),
            self.metadata_key.clone(),
            self.secret_url.clone(),
        ]
    }
}

/// Store a secret.
pub fn execute(
    client: &Client,
    format: OutputFormat,
    secret: Option<String>,
    passphrase: Option<String>,
    ttl: u64,
    recipient: &str,
) -> Result<()> {
    let passphrase = prompt::passphrase(passphrase)?;
    let secret = prompt::secret(secret)?;

    let meta = client.put(&secret, &passphrase, ttl, recipient)?;
    info!(metadata_key = %meta.metadata_key, "stored secret");

    let result = Stored {
        secret_url: meta.secret_url()?.to_string(),
        secret_key: meta.secret_key,
        metadata_key: meta.metadata_key,
    };
    output::print(&result, format)
}
