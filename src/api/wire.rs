//! Wire-format records for the service's JSON envelope.
//!
//! The service omits fields freely depending on the operation, so every
//! field defaults. These records never leave this crate; the public shapes
//! are in [`super::model`].

use serde::Deserialize;

/// The common record returned by share, generate, secret, and private
/// endpoints. `value` is only present when the operation reveals the
/// secret itself; `recipient` arrives as a list even though at most one
/// entry is ever set.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct KeyResponse {
    #[serde(default)]
    pub custid: String,
    #[serde(default)]
    pub metadata_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub ttl: u64,
    #[serde(default)]
    pub metadata_ttl: u64,
    #[serde(default)]
    pub secret_ttl: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub recipient: Vec<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub passphrase_required: bool,
}

/// Burn wraps the metadata record in a `state` member.
#[derive(Debug, Deserialize)]
pub(crate) struct BurnResponse {
    pub state: KeyResponse,
}

/// Non-2xx responses carry a human-readable message.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    #[serde(default)]
    pub status: String,
}
