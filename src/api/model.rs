//! Public model types.
//!
//! Everything here is a read-only reflection of the last server response;
//! the client never mutates a [`Metadata`] locally.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use super::wire::KeyResponse;

/// Base authority for the public sharing and management links.
const SHARE_BASE: &str = "https://onetimesecret.com";

/// Lifecycle state of a stored secret.
///
/// Transitions happen server-side only; `Other` absorbs any state string a
/// newer service version may introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretState {
    New,
    Viewed,
    Received,
    Burned,
    Other,
}

impl SecretState {
    pub(crate) fn parse(s: &str) -> Self {
        match s {
            "new" => SecretState::New,
            "viewed" => SecretState::Viewed,
            "received" => SecretState::Received,
            "burned" => SecretState::Burned,
            _ => SecretState::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecretState::New => "new",
            SecretState::Viewed => "viewed",
            SecretState::Received => "received",
            SecretState::Burned => "burned",
            SecretState::Other => "other",
        }
    }
}

impl fmt::Display for SecretState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time health of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    Nominal,
    Offline,
    Other,
}

impl SystemStatus {
    pub(crate) fn parse(s: &str) -> Self {
        match s {
            "nominal" => SystemStatus::Nominal,
            "offline" => SystemStatus::Offline,
            _ => SystemStatus::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Nominal => "nominal",
            SystemStatus::Offline => "offline",
            SystemStatus::Other => "other",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored secret's lifecycle record.
///
/// `secret_key` is cleared by the service once the secret has been
/// retrieved or burned; an empty key means no sharing link can exist.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub customer_id: String,
    pub metadata_key: String,
    pub secret_key: String,
    pub initial_metadata_ttl: u64,
    pub metadata_ttl: u64,
    pub secret_ttl: u64,
    pub state: SecretState,
    pub updated: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub obfuscated_recipient: String,
    pub has_passphrase: bool,
}

impl Metadata {
    /// Public link that retrieves (and consumes) the secret.
    ///
    /// Fails with [`Error::Destroyed`] once the secret key has been cleared,
    /// so a dangling link can never be handed out.
    pub fn secret_url(&self) -> Result<Url> {
        if self.secret_key.is_empty() {
            return Err(Error::Destroyed);
        }
        share_url("secret", &self.secret_key)
    }

    /// Private link for inspecting or burning the secret.
    pub fn metadata_url(&self) -> Result<Url> {
        share_url("private", &self.metadata_key)
    }
}

impl From<KeyResponse> for Metadata {
    fn from(kr: KeyResponse) -> Self {
        Metadata {
            customer_id: kr.custid,
            metadata_key: kr.metadata_key,
            secret_key: kr.secret_key,
            initial_metadata_ttl: kr.ttl,
            metadata_ttl: kr.metadata_ttl,
            secret_ttl: kr.secret_ttl,
            state: SecretState::parse(&kr.state),
            updated: from_epoch(kr.updated),
            created: from_epoch(kr.created),
            obfuscated_recipient: kr.recipient.into_iter().next().unwrap_or_default(),
            has_passphrase: kr.passphrase_required,
        }
    }
}

/// The subset of [`Metadata`] returned by the recent-secrets listing.
#[derive(Debug, Clone, Serialize)]
pub struct PartialMetadata {
    pub customer_id: String,
    pub metadata_key: String,
    pub initial_metadata_ttl: u64,
    pub metadata_ttl: u64,
    pub secret_ttl: u64,
    pub state: SecretState,
    pub updated: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub recipient: String,
}

impl From<KeyResponse> for PartialMetadata {
    fn from(kr: KeyResponse) -> Self {
        PartialMetadata {
            customer_id: kr.custid,
            metadata_key: kr.metadata_key,
            initial_metadata_ttl: kr.ttl,
            metadata_ttl: kr.metadata_ttl,
            secret_ttl: kr.secret_ttl,
            state: SecretState::parse(&kr.state),
            updated: from_epoch(kr.updated),
            created: from_epoch(kr.created),
            recipient: kr.recipient.into_iter().next().unwrap_or_default(),
        }
    }
}

fn from_epoch(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn share_url(kind: &str, key: &str) -> Result<Url> {
    let mut url = Url::parse(SHARE_BASE)?;
    // An https base always has path segments.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.extend([kind, key]);
    }
    Ok(url)
}
