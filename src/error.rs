use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("nothing to share: secret is empty")]
    Invalid,

    #[error("unknown secret")]
    NotFound,

    #[error("secret has been burned or retrieved")]
    Destroyed,

    #[error("missing username: pass --username, set WICK_USERNAME, or add `username` to the config file")]
    MissingUsername,

    #[error("missing API key: pass --key, set WICK_KEY, or add `key` to the config file")]
    MissingKey,

    #[error("service error: {0}")]
    Service(String),

    #[error("invalid service url: {0}")]
    InvalidHost(String),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
