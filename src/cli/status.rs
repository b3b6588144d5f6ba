//! Status command.
//!
//! Print the service's health.

use serde::Serialize;

use crate::api::{Client, SystemStatus};
use crate::cli::output::{self, OutputFormat, Tabular};
use crate::error::Result;

#[derive(Serialize)]
struct Report {
    status: SystemStatus,
}

impl Tabular for Report {
    fn row(&self) -> Vec<String> {
        vec![self.status.to_string()]
    }
}

/// Print service health.
pub fn execute(client: &Client, format: OutputFormat) -> Result<()> {
    let status = client.status()?;
    output::print(&Report { status }, format)
}
