//! Command-line interface.

pub mod burn;
pub mod completions;
pub mod gen;
pub mod get;
pub mod meta;
pub mod output;
pub mod prompt;
pub mod put;
pub mod recent;
pub mod resolve;
pub mod status;

use clap::{Parser, Subcommand};

use crate::api::Client;
use crate::config::Config;
use crate::error::Result;
use output::OutputFormat;

/// Wick - share one-time secrets from the command line.
#[derive(Parser)]
#[command(
    name = "wick",
    about = "Share one-time secrets from the command line",
    version,
    after_help = "Secrets are readable exactly once. Light the wick, walk away. 🔥"
)]
pub struct Cli {
    /// Account username (falls back to WICK_USERNAME, then the config file)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// API key (falls back to WICK_KEY, then the config file)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Print results as indented JSON instead of tab-separated fields
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Store a secret
    #[command(after_help = "With no SECRET argument (or \"-\"), reads stdin: \
one masked line on a terminal, everything to EOF otherwise.")]
    Put {
        /// Secret value; omit or pass "-" to read from stdin
        secret: Option<String>,

        /// Protect the secret with a passphrase ("-" reads stdin)
        #[arg(long)]
        passphrase: Option<String>,

        /// Seconds until the secret expires
        #[arg(long, default_value_t = 0)]
        ttl: u64,

        /// Email address the service should notify with the sharing link
        #[arg(long)]
        recipient: Option<String>,
    },

    /// Retrieve a secret (destroying it in the same act)
    Get {
        /// Secret key from the sharing link
        secret_key: String,

        /// Passphrase the secret was stored with ("-" reads stdin)
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// Have the service generate a short secret
    Gen {
        /// Protect the secret with a passphrase ("-" reads stdin)
        #[arg(long)]
        passphrase: Option<String>,

        /// Seconds until the secret expires
        #[arg(long, default_value_t = 0)]
        ttl: u64,

        /// Email address the service should notify with the sharing link
        #[arg(long)]
        recipient: Option<String>,
    },

    /// Destroy a secret before anyone reads it
    Burn {
        /// Private metadata key
        metadata_key: String,

        /// Passphrase the secret was stored with ("-" reads stdin)
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// Print a secret's metadata
    Meta {
        /// Private metadata key
        metadata_key: String,
    },

    /// List metadata for recently created secrets
    Recent,

    /// Print service health
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let Cli {
        username,
        key,
        json,
        verbose: _,
        command,
    } = cli;

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Tabular
    };
    let client = || client_for(username.as_deref(), key.as_deref());

    match command {
        Put {
            secret,
            passphrase,
            ttl,
            recipient,
        } => put::execute(
            &client()?,
            format,
            secret,
            passphrase,
            ttl,
            recipient.as_deref().unwrap_or(""),
        ),
        Get {
            secret_key,
            passphrase,
        } => get::execute(&client()?, format, &secret_key, passphrase),
        Gen {
            passphrase,
            ttl,
            recipient,
        } => gen::execute(
            &client()?,
            format,
            passphrase,
            ttl,
            recipient.as_deref().unwrap_or(""),
        ),
        Burn {
            metadata_key,
            passphrase,
        } => burn::execute(&client()?, format, &metadata_key, passphrase),
        Meta { metadata_key } => meta::execute(&client()?, format, &metadata_key),
        Recent => recent::execute(&client()?, format),
        Status => status::execute(&client()?, format),
        Completions { shell } => completions::execute(shell),
    }
}

/// Build a client from resolved credentials and host.
///
/// Credential resolution runs (and can fail) before any network call.
fn client_for(username: Option<&str>, key: Option<&str>) -> Result<Client> {
    let config = Config::load()?;
    let creds = resolve::credentials(username, key, &config)?;
    match resolve::host(&config) {
        Some(host) => Client::with_base_url(creds.username, creds.key, &host),
        None => Client::new(creds.username, creds.key),
    }
}
