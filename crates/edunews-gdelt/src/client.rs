//! HTTP client for the GDELT television API.
//!
//! One method matters: [`GdeltClient::fetch_clips`] runs the fixed clip
//! gallery query for a single keyword and returns normalized records.

use std::time::Duration;

use reqwest::{Client, Url};

use edunews_core::{AppConfig, ClipRecord};

use crate::error::GdeltError;
use crate::normalize::clip_from_wire;
use crate::retry::retry_with_backoff;
use crate::types::ClipGalleryResponse;

const DEFAULT_BASE_URL: &str = "https://api.gdeltproject.org/api/v2/tv/tv";

/// Fixed query template. Every keyword retrieval uses the same shape: one
/// week of national-market coverage as a JSON clip gallery, capped at
/// `MAX_RECORDS` entries. Only the `query` parameter varies.
const RESULT_MODE: &str = "ClipGallery";
const RESPONSE_FORMAT: &str = "json";
const TIME_SPAN: &str = "1W";
const MARKET: &str = "National";
const MAX_RECORDS: &str = "3000";

/// Client for the GDELT television API.
///
/// Manages the HTTP client, base URL, and retry policy. Use
/// [`GdeltClient::new`] or [`GdeltClient::from_config`] for production, or
/// [`GdeltClient::with_base_url`] to point at a mock server in tests.
pub struct GdeltClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl GdeltClient {
    /// Creates a new client pointed at the production GDELT API.
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, GdeltError> {
        Self::with_base_url(
            timeout_secs,
            user_agent,
            max_retries,
            backoff_base_ms,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a new client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GdeltError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, GdeltError> {
        Self::with_base_url(
            config.fetch_timeout_secs,
            &config.user_agent,
            config.fetch_max_retries,
            config.fetch_backoff_base_ms,
            &config.gdelt_base_url,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GdeltError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
        base_url: &str,
    ) -> Result<Self, GdeltError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| GdeltError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches the current clip gallery for one keyword.
    ///
    /// Runs the fixed query with the keyword slotted in, retrying transient
    /// failures per the configured policy, and maps the wire clips onto
    /// [`ClipRecord`]s attributed to `keyword`. Wire entries without an
    /// identifier or snippet are dropped during mapping.
    ///
    /// # Errors
    ///
    /// - [`GdeltError::Http`] on network failure (after retries).
    /// - [`GdeltError::UnexpectedStatus`] on a non-2xx response (5xx after
    ///   retries).
    /// - [`GdeltError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn fetch_clips(&self, keyword: &str) -> Result<Vec<ClipRecord>, GdeltError> {
        let url = self.clip_query_url(keyword);
        tracing::debug!(keyword, url = %url, "fetching clip gallery");

        let response = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move { self.request_json(&url).await }
        })
        .await?;

        let received = response.clips.len();
        let records: Vec<ClipRecord> = response
            .clips
            .into_iter()
            .filter_map(|wire| clip_from_wire(wire, keyword))
            .collect();
        if records.len() < received {
            tracing::debug!(
                keyword,
                dropped = received - records.len(),
                "dropped wire clips missing an identifier or snippet"
            );
        }
        Ok(records)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters via [`Url::query_pairs_mut`].
    fn clip_query_url(&self, keyword: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("mode", RESULT_MODE);
            pairs.append_pair("format", RESPONSE_FORMAT);
            pairs.append_pair("TIMESPAN", TIME_SPAN);
            pairs.append_pair("LAST24", "yes");
            pairs.append_pair("DATACOMB", "combined");
            pairs.append_pair("maxrecords", MAX_RECORDS);
            pairs.append_pair("query", &format!("{keyword} market:\"{MARKET}\""));
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as a clip gallery.
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] on network failure,
    /// [`GdeltError::UnexpectedStatus`] on a non-2xx status, and
    /// [`GdeltError::Deserialize`] if the body is not the expected shape.
    async fn request_json(&self, url: &Url) -> Result<ClipGalleryResponse, GdeltError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GdeltError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GdeltError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
