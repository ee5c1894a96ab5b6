use std::time::Duration;

use async_trait::async_trait;
use gg_core::ports::MediaSourcePort;
use gg_core::{AppConfig, MediaRecord, PageQuery, QueryMode};
use tracing::{debug, debug_span, warn, Instrument};

use super::dto::PageEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Build(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

/// HTTP client for `{base}/trending` and `{base}/search`.
///
/// Stateless apart from the shared connection pool: no retry, no backoff,
/// no caching.
pub struct GiphyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GiphyClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("gifgrid/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let timeout =
            (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs));
        Self::new(config.api_base_url.clone(), config.api_key.clone(), timeout)
    }

    pub fn endpoint_url(&self, mode: QueryMode) -> String {
        format!("{}/{}", self.base_url, mode.endpoint())
    }

    /// One request, with failures reported to the caller.
    ///
    /// Objects missing a required reference are skipped; the rest of the
    /// page is still returned.
    pub async fn try_fetch(&self, query: &PageQuery) -> Result<Vec<MediaRecord>, FetchError> {
        if query.mode == QueryMode::Search && query.query.is_empty() {
            debug!("search without query text; nothing to request");
            return Ok(Vec::new());
        }

        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("offset", query.offset.to_string()),
            ("limit", query.effective_limit().to_string()),
        ];
        if query.mode == QueryMode::Search {
            params.push(("q", query.query.clone()));
        }

        let response = self
            .http
            .get(self.endpoint_url(query.mode))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let envelope: PageEnvelope =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let mut records = Vec::with_capacity(envelope.data.len());
        for dto in envelope.data {
            match MediaRecord::try_from(dto) {
                Ok(record) => records.push(record),
                Err(err) => debug!(error = %err, "skipping incomplete media object"),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl MediaSourcePort for GiphyClient {
    async fn fetch_page(&self, query: &PageQuery) -> Vec<MediaRecord> {
        let span = debug_span!(
            "infra.giphy.fetch_page",
            endpoint = query.mode.endpoint(),
            offset = query.offset,
            limit = query.effective_limit(),
        );

        async {
            match self.try_fetch(query).await {
                Ok(records) => {
                    debug!(count = records.len(), "page fetched");
                    records
                }
                Err(err) => {
                    warn!(error = %err, "Error fetching GIFs; returning empty page");
                    Vec::new()
                }
            }
        }
        .instrument(span)
        .await
    }
}
