//! Recent command.
//!
//! List metadata for recently created secrets, one record per line.

use crate::api::Client;
use crate::cli::output::{self, OutputFormat};
use crate::error::Result;

/// Print recent secrets' metadata.
pub fn execute(client: &Client, format: OutputFormat) -> Result<()> {
    let metas = client.recent()?;
    output::print_list(&metas, format)
}
