//! NCBI E-utilities client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Request pacing per the NCBI limits (3 req/s, 10 req/s with an API key)
//!
//! Endpoints used:
//!   esearch: `{eutils}/esearch.fcgi` (JSON)
//!   efetch:  `{eutils}/efetch.fcgi` (PubMed XML)

mod xml;

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::{debug, info, instrument};

pub use xml::parse_efetch_xml;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{PaperRecord, SearchResponse};

/// PubMed client over the E-utilities.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API key (optional).
    api_key: Option<String>,

    /// Contact e-mail (optional).
    email: Option<String>,

    /// E-utilities base URL.
    eutils_url: String,

    /// Delay before each request.
    rate_limit_delay: Duration,

    /// ESearch `retmax`.
    max_results: u32,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            api_key: config.api_key,
            email: config.email,
            eutils_url: config.eutils_url,
            rate_limit_delay: config.rate_limit_delay,
            max_results: config.max_results,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search PubMed and fetch full records for the hits.
    ///
    /// Returns `Ok(vec![])` when the search has no hits; any transport,
    /// status or parse failure is an error.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    #[instrument(skip(self))]
    pub async fn fetch_papers(&self, query: &str) -> ClientResult<Vec<PaperRecord>> {
        let pmids = self.search(query).await?;
        if pmids.is_empty() {
            info!("PubMed search returned no results");
            return Ok(Vec::new());
        }

        let papers = self.fetch_details(&pmids).await?;
        info!(pmids = pmids.len(), papers = papers.len(), "Fetched PubMed records");
        Ok(papers)
    }

    /// Run ESearch and return the matching PMIDs.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or when ESearch reports a query error.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ClientResult<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.eutils_url);

        let mut params = self.base_params();
        params.push(("term".to_string(), query.to_string()));
        params.push(("retmax".to_string(), self.max_results.to_string()));
        params.push(("retmode".to_string(), "json".to_string()));

        let text = self.get(&url, &params).await?;
        let response: SearchResponse = serde_json::from_str(&text)?;

        if let Some(message) = response.error_message() {
            return Err(ClientError::bad_request(message));
        }

        debug!(total = response.total(), ids = response.esearchresult.idlist.len(), "ESearch done");
        Ok(response.esearchresult.idlist)
    }

    /// Run EFetch for the given PMIDs and parse the article XML.
    ///
    /// Requests are chunked to [`api::EFETCH_BATCH_SIZE`] ids and issued in order.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or malformed XML.
    #[instrument(skip(self, pmids), fields(pmids = pmids.len()))]
    pub async fn fetch_details(&self, pmids: &[String]) -> ClientResult<Vec<PaperRecord>> {
        let url = format!("{}/efetch.fcgi", self.eutils_url);
        let mut papers = Vec::with_capacity(pmids.len());

        for chunk in pmids.chunks(api::EFETCH_BATCH_SIZE) {
            let mut params = self.base_params();
            params.push(("id".to_string(), chunk.join(",")));
            params.push(("retmode".to_string(), "xml".to_string()));

            let xml = self.get(&url, &params).await?;
            let parsed = parse_efetch_xml(&xml)?;
            debug!(requested = chunk.len(), parsed = parsed.len(), "EFetch chunk done");
            papers.extend(parsed);
        }

        Ok(papers)
    }

    /// Parameters sent with every request.
    fn base_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("tool".to_string(), api::TOOL_NAME.to_string()),
        ];
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
        params
    }

    /// Make a GET request and return the body text.
    async fn get(&self, url: &str, params: &[(String, String)]) -> ClientResult<String> {
        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        let response = self.client.get(url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        Ok(response.text().await?)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("eutils_url", &self.eutils_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
