//! Typed HTTP wrappers for the heritage site API, as used by the site's pages.

pub mod contact;
pub mod errors;
pub mod videos;
pub mod youtube;

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use contact::ContactApi;
pub use errors::ClientError;
pub use videos::VideoApi;

/// Handle on one deployment of the site API, e.g. `http://localhost:8080/api`.
#[derive(Clone, Debug)]
pub struct SiteClient {
    http: reqwest::Client,
    base: String,
}

impl SiteClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base = base_url.trim().trim_end_matches('/');
        Url::parse(base).map_err(|e| ClientError::BaseUrl(format!("{base_url}: {e}")))?;
        Ok(Self { http, base: base.to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn videos(&self) -> VideoApi<'_> {
        VideoApi::new(self)
    }

    pub fn contact(&self) -> ContactApi<'_> {
        ContactApi::new(self)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Turn a non-success response into `ClientError::Api`, preferring the
/// server's `error` field over `fallback`.
pub(crate) async fn check(res: Response, fallback: &str) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let message = res
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    tracing::debug!(%status, %message, "api request failed");
    Err(ClientError::Api { status, message })
}

pub(crate) async fn decode<T: DeserializeOwned>(res: Response, fallback: &str) -> Result<T, ClientError> {
    Ok(check(res, fallback).await?.json::<T>().await?)
}
