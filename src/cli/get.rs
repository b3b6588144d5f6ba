//! Get command.
//!
//! Retrieve a secret's value; the service destroys it in the same act.

use serde::Serialize;
use tracing::info;

use crate::api::Client;
use crate::cli::output::{self, OutputFormat, Tabular};
use crate::cli::prompt;
use crate::error::Result;

#[derive(Serialize)]
struct Retrieved {
    value: String,
}

impl Tabular for Retrieved {
    fn row(&self) -> Vec<String> {
        vec![self.value.clone()]
    }
}

/// Retrieve and print a secret.
pub fn execute(
    client: &Client,
    format: OutputFormat,
    secret_key: &str,
    passphrase: Option<String>,
) -> Result<()> {
    let passphrase = prompt::passphrase(passphrase)?;
    let value = client.get(secret_key, &passphrase)?;
    info!("retrieved secret");

    output::print(&Retrieved { value }, format)
}
