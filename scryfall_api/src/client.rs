//! HTTP client for the Scryfall REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, SearchQuery},
    types::{ApiErrorBody, SearchPage},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Scryfall REST API.
///
/// The API asks every caller to identify itself with a `User-Agent` and an
/// `Accept` header, so both are set on the underlying `reqwest::Client`.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.scryfall.com`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production Scryfall API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    ///
    /// Fails with [`Error::RequestFailed`] when the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base_api_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {:?}: {}", base_url, e);
            Error::RequestFailed
        })?;
        let http = reqwest::Client::builder()
            .user_agent(user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self { base_api_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            let api_error = serde_json::from_str::<ApiErrorBody>(&body).ok();
            if status.as_u16() == 404 {
                tracing::debug!("Request returned 404: {}", snippet);
            } else {
                tracing::error!("Request failed with status {}: {}", status, snippet);
            }
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                code: api_error.as_ref().map(|e| e.code.clone()),
                details: api_error.map(|e| e.details),
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Parse {
                message: e.to_string(),
            }
        })?;

        Ok(parsed)
    }

    /// Fetches one page of card search results.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage, Error> {
        self.get::<SearchPage, SearchQuery>("/cards/search", query)
            .await
    }
}

fn user_agent() -> String {
    format!("scryfall-sheets/{}", env!("CARGO_PKG_VERSION"))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
