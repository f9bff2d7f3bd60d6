//! HTTP client for the movie database API
//!
//! One GET per probe, authenticated with the `X-API-KEY` header. The client
//! never treats a non-2xx status as a transport error: negative cases
//! assert on exactly those statuses, so every completed exchange is handed
//! back as a [`ProbeResponse`] snapshot.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::SuiteResult;

const API_KEY_HEADER: &str = "X-API-KEY";

/// Client for the movie database service.
pub struct MovieApi {
    http: Client,
    config: ApiConfig,
}

impl MovieApi {
    /// Build a client for the given config.
    ///
    /// No timeout override is applied; the probes run with the HTTP
    /// library's defaults.
    pub fn new(config: ApiConfig) -> SuiteResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// `GET /v1.4/movie/{id}`.
    ///
    /// The id is a string so malformed ids (`abc`, `-1`, `1.4`) travel to
    /// the service verbatim.
    pub async fn movie_by_id(&self, id: &str) -> SuiteResult<ProbeResponse> {
        self.get(&format!("movie/{id}"), &[]).await
    }

    /// `GET /v1.4/movie/search?query=...`.
    pub async fn search_by_title(&self, query: &str) -> SuiteResult<ProbeResponse> {
        self.get("movie/search", &[("query", query)]).await
    }

    /// `GET /v1.4/movie/random`.
    pub async fn random_movie(&self) -> SuiteResult<ProbeResponse> {
        self.get("movie/random", &[]).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1.4/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> SuiteResult<ProbeResponse> {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let response = self
            .http
            .get(url.as_str())
            .header(API_KEY_HEADER, self.config.token.as_str())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;
        debug!(%url, %status, bytes = body.len(), "response");

        Ok(ProbeResponse { url, status, body })
    }
}

/// Snapshot of one completed exchange, read only by the case that made it.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// Final request URL, for diagnostics.
    pub url: String,

    /// HTTP status code.
    pub status: StatusCode,

    /// Raw response body.
    pub body: String,
}

impl ProbeResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> SuiteResult<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Char-safe body prefix for assertion messages. Bodies are mostly
    /// Cyrillic, so byte slicing would split code points.
    pub fn body_snippet(&self) -> String {
        const SNIPPET_CHARS: usize = 200;
        if self.body.chars().count() <= SNIPPET_CHARS {
            self.body.clone()
        } else {
            let mut snippet: String = self.body.chars().take(SNIPPET_CHARS).collect();
            snippet.push_str("...");
            snippet
        }
    }
}
