//! Burn command.
//!
//! Destroy a secret before it is ever retrieved.

use serde::Serialize;
use tracing::info;

use crate::api::{Client, SecretState};
use crate::cli::output::{self, OutputFormat, Tabular};
use crate::cli::prompt;
use crate::error::Result;

#[derive(Serialize)]
struct Burned {
    metadata_key: String,
    state: SecretState,
}

impl Tabular for Burned {
    fn row(&self) -> Vec<String> {
        vec![self.metadata_key.clone(), self.state.to_string()]
    }
}

/// Burn a secret.
pub fn execute(
    client: &Client,
    format: OutputFormat,
    metadata_key: &str,
    passphrase: Option<String>,
) -> Result<()> {
    let passphrase = prompt::passphrase(passphrase)?;
    let meta = client.burn(metadata_key, &passphrase)?;
    info!(metadata_key = %meta.metadata_key, "burned secret");

    let result = Burned {
        metadata_key: meta.metadata_key,
        state: meta.state,
    };
    output::print(&result, format)
}
