//! Client for the one-time secret service.
//!
//! Every operation is a single blocking HTTP request with Basic Auth; the
//! client holds no state beyond its credentials and transport, so one
//! instance is safe to share across callers.

mod model;
mod wire;

pub use model::{Metadata, PartialMetadata, SecretState, SystemStatus};

use reqwest::blocking::Client as HttpClient;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use wire::{BurnResponse, ErrorResponse, KeyResponse, StatusResponse};

/// Default service endpoint.
pub const DEFAULT_HOST: &str = "https://onetimesecret.com";

const API_PREFIX: [&str; 2] = ["api", "v1"];

// The two error messages the service distinguishes; everything else is
// surfaced verbatim.
const MSG_NOTHING_TO_SHARE: &str = "You did not provide anything to share";
const MSG_UNKNOWN_SECRET: &str = "Unknown secret";

/// A client for the one-time secret service.
pub struct Client {
    http: HttpClient,
    base_url: Url,
    username: String,
    key: String,
}

impl Client {
    /// Create a client against the default host.
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(username, key, DEFAULT_HOST)
    }

    /// Create a client against an alternate host, e.g. a regional endpoint.
    pub fn with_base_url(
        username: impl Into<String>,
        key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidHost(base_url.into()));
        }
        Ok(Client {
            http: HttpClient::builder().build()?,
            base_url,
            username: username.into(),
            key: key.into(),
        })
    }

    /// Store a secret with an optional passphrase, TTL in seconds, and
    /// recipient, returning the new secret's metadata.
    ///
    /// An empty secret fails with [`Error::Invalid`] before any request is
    /// made; the service would reject it anyway.
    pub fn put(
        &self,
        secret: &str,
        passphrase: &str,
        ttl: u64,
        recipient: &str,
    ) -> Result<Metadata> {
        if secret.is_empty() {
            return Err(Error::Invalid);
        }

        let ttl = ttl.to_string();
        let params = [
            ("secret", secret),
            ("passphrase", passphrase),
            ("ttl", ttl.as_str()),
            ("recipient", recipient),
        ];
        let kr: KeyResponse = self.call(Method::POST, &["share"], &params)?;
        Ok(kr.into())
    }

    /// Retrieve a secret's value, consuming it server-side.
    ///
    /// An unknown key and a wrong passphrase are both [`Error::NotFound`];
    /// the service does not tell them apart and neither do we.
    pub fn get(&self, secret_key: &str, passphrase: &str) -> Result<String> {
        let params = [("passphrase", passphrase)];
        let kr: KeyResponse = self.call(Method::POST, &["secret", secret_key], &params)?;
        Ok(kr.value)
    }

    /// Have the service generate a short secret, returning the value and
    /// its metadata.
    pub fn generate(
        &self,
        passphrase: &str,
        ttl: u64,
        recipient: &str,
    ) -> Result<(String, Metadata)> {
        let ttl = ttl.to_string();
        let params = [
            ("passphrase", passphrase),
            ("ttl", ttl.as_str()),
            ("recipient", recipient),
        ];
        let kr: KeyResponse = self.call(Method::POST, &["generate"], &params)?;
        let value = kr.value.clone();
        Ok((value, kr.into()))
    }

    /// Destroy a secret before it is retrieved.
    ///
    /// Fails with [`Error::NotFound`] if the key is unknown or the secret
    /// was already burned or retrieved.
    pub fn burn(&self, metadata_key: &str, passphrase: &str) -> Result<Metadata> {
        let params = [("passphrase", passphrase)];
        let br: BurnResponse =
            self.call(Method::POST, &["private", metadata_key, "burn"], &params)?;
        Ok(br.state.into())
    }

    /// Fetch the current metadata snapshot for a secret.
    pub fn metadata(&self, metadata_key: &str) -> Result<Metadata> {
        let kr: KeyResponse = self.call(Method::POST, &["private", metadata_key], &[])?;
        Ok(kr.into())
    }

    /// List partial metadata for recently created secrets.
    pub fn recent(&self) -> Result<Vec<PartialMetadata>> {
        let krs: Vec<KeyResponse> = self.call(Method::GET, &["private", "recent"], &[])?;
        Ok(krs.into_iter().map(Into::into).collect())
    }

    /// Read the service's health status.
    pub fn status(&self) -> Result<SystemStatus> {
        let sr: StatusResponse = self.call(Method::GET, &["status"], &[])?;
        Ok(SystemStatus::parse(&sr.status))
    }

    /// Issue one request and decode the JSON response.
    ///
    /// Empty parameter values are transmitted, not omitted; the service
    /// treats an absent passphrase and an empty one the same way, and we
    /// rely on that.
    fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(segments);
        debug!(%method, %url, "request");

        let mut request = self
            .http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.key));
        if !params.is_empty() {
            request = request.form(params);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(%status, bytes = body.len(), "response");

        if !status.is_success() {
            let envelope: ErrorResponse = serde_json::from_str(&body)?;
            return Err(classify(&envelope.message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Infallible: cannot-be-a-base URLs are rejected at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(API_PREFIX.iter().chain(segments.iter()));
        }
        url
    }
}

/// Map the service's error message onto the error taxonomy.
fn classify(message: &str) -> Error {
    match message {
        MSG_NOTHING_TO_SHARE => Error::Invalid,
        MSG_UNKNOWN_SECRET => Error::NotFound,
        _ => Error::Service(message.to_string()),
    }
}
