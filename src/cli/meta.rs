//! Meta command.
//!
//! Print the current metadata snapshot for a secret.

use crate::api::Client;
use crate::cli::output::{self, OutputFormat};
use crate::error::Result;

/// Print a secret's metadata.
pub fn execute(client: &Client, format: OutputFormat, metadata_key: &str) -> Result<()> {
    let meta = client.metadata(metadata_key)?;
    output::print(&meta, format)
}
