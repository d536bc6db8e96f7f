//! REST API client for the fragrance finder endpoints.
//!
//! Wraps the upstream HTTP API (perfume search, dupe lookup) using
//! [`reqwest`]. Every call carries the static key/host header pair the
//! upstream marketplace requires.

use reqwest::header::ACCEPT;
use reqwest::Url;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://fragrancefinder.p.rapidapi.com";

/// Default value of the host header expected by the upstream marketplace.
pub const DEFAULT_API_HOST: &str = "fragrancefinder.p.rapidapi.com";

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// HTTP client for the fragrance API.
#[derive(Clone)]
pub struct FragranceApi {
    client: reqwest::Client,
    base_url: Url,
    api_host: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for FragranceApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragranceApi")
            .field("base_url", &self.base_url.as_str())
            .field("api_host", &self.api_host)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Errors from the fragrance API layer.
#[derive(Debug, thiserror::Error)]
pub enum FragranceApiError {
    /// No API key is configured, so no request was sent.
    #[error("Fragrance API key is not configured")]
    MissingApiKey,

    /// The configured base URL cannot carry request paths.
    #[error("Invalid fragrance API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Fragrance API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl FragranceApi {
    /// Create a client for the API at `base_url`.
    ///
    /// An empty `api_key` counts as missing.
    pub fn new(
        base_url: &str,
        api_host: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, FragranceApiError> {
        Self::with_client(reqwest::Client::new(), base_url, api_host, api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        api_host: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, FragranceApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FragranceApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FragranceApiError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            api_host: api_host.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Whether calls can be authenticated at all.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search perfumes by free text.
    ///
    /// Sends `GET /perfumes/search?q={query}`.
    pub async fn search_perfumes(&self, query: &str) -> Result<serde_json::Value, FragranceApiError> {
        let mut url = self.endpoint(&["perfumes", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }

    /// Look up cheaper alternatives ("dupes") for a perfume.
    ///
    /// Sends `GET /dupes/{perfume_id}`; the id is percent-encoded as a single
    /// path segment.
    pub async fn find_dupes(&self, perfume_id: &str) -> Result<serde_json::Value, FragranceApiError> {
        let url = self.endpoint(&["dupes", perfume_id])?;
        self.get_json(url).await
    }

    // ---- private helpers ----

    /// Append path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FragranceApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FragranceApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, FragranceApiError> {
        let api_key = self.api_key.as_deref().ok_or(FragranceApiError::MissingApiKey)?;

        tracing::debug!(path = url.path(), "Calling fragrance API");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }

    /// Return the response unchanged on a 2xx status, or an
    /// [`FragranceApiError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FragranceApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Fragrance API returned an error status");
            return Err(FragranceApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
