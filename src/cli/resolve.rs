//! Credential resolution.
//!
//! Precedence per field, tried in order: explicit flag, environment
//! variable, config file. The first source producing a non-empty value
//! wins; username and key resolve independently. The ordered list of
//! resolver functions keeps the precedence rule auditable in one place.

use crate::config::Config;
use crate::error::{Error, Result};

pub const USERNAME_ENV: &str = "WICK_USERNAME";
pub const KEY_ENV: &str = "WICK_KEY";
pub const HOST_ENV: &str = "WICK_HOST";

/// Resolved account credentials, immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub key: String,
}

/// Resolve credentials, failing before any network call when a field is
/// missing from every source.
pub fn credentials(
    flag_username: Option<&str>,
    flag_key: Option<&str>,
    config: &Config,
) -> Result<Credentials> {
    let username = first_nonempty(&[
        &|| flag_username.map(str::to_string),
        &|| std::env::var(USERNAME_ENV).ok(),
        &|| config.username.clone(),
    ])
    .ok_or(Error::MissingUsername)?;

    let key = first_nonempty(&[
        &|| flag_key.map(str::to_string),
        &|| std::env::var(KEY_ENV).ok(),
        &|| config.key.clone(),
    ])
    .ok_or(Error::MissingKey)?;

    Ok(Credentials { username, key })
}

/// Resolve the service host override, if any.
pub fn host(config: &Config) -> Option<String> {
    first_nonempty(&[&|| std::env::var(HOST_ENV).ok(), &|| config.host.clone()])
}

/// Try sources in order; the first non-empty value wins.
fn first_nonempty(sources: &[&dyn Fn() -> Option<String>]) -> Option<String> {
    sources
        .iter()
        .find_map(|source| source().filter(|value| !value.is_empty()))
}
