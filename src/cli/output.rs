//! Result rendering and stderr helpers.
//!
//! Results go to stdout: tab-separated fields by default (one record per
//! line, nested records flattened in field order, timestamps RFC 3339), or
//! indented JSON with `--json`. Diagnostics go to stderr and never mix
//! into the result stream.

use console::style;
use serde::Serialize;

use crate::api::{Metadata, PartialMetadata};
use crate::error::Result;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tabular,
    Json,
}

/// A record that renders as one line of tab-separated fields.
pub trait Tabular {
    fn row(&self) -> Vec<String>;
}

/// Render a single record.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Tabular => Ok(value.row().join("\t")),
    }
}

/// Render a list: a JSON array, or one tab-separated record per line.
pub fn render_list<T: Serialize + Tabular>(values: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
        OutputFormat::Tabular => Ok(values
            .iter()
            .map(|v| v.row().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Print a single record to stdout.
pub fn print<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a list of records to stdout.
pub fn print_list<T: Serialize + Tabular>(values: &[T], format: OutputFormat) -> Result<()> {
    let rendered = render_list(values, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint to stderr.
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}

fn rfc3339(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

impl Tabular for Metadata {
    fn row(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.metadata_key.clone(),
            self.secret_key.clone(),
            self.initial_metadata_ttl.to_string(),
            self.metadata_ttl.to_string(),
            self.secret_ttl.to_string(),
            self.state.to_string(),
            rfc3339(&self.updated),
            rfc3339(&self.created),
            self.obfuscated_recipient.clone(),
            self.has_passphrase.to_string(),
        ]
    }
}

impl Tabular for PartialMetadata {
    fn row(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.metadata_key.clone(),
            self.initial_metadata_ttl.to_string(),
            self.metadata_ttl.to_string(),
            self.secret_ttl.to_string(),
            self.state.to_string(),
            rfc3339(&self.updated),
            rfc3339(&self.created),
            self.recipient.clone(),
        ]
    }
}
