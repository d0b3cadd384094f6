//! Retry-aware HTTP client shared by every scraper.
//!
//! DraftKings rate-limits aggressively and its edge occasionally serves
//! transient 5xx responses, so all outbound requests go through
//! [`RetryClient`]: a bounded retry count with exponential backoff on
//! timeouts, connection errors, and a small allowlist of retryable statuses.
//! Anything else (404s for expired contests, auth walls) surfaces
//! immediately to the caller.

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DkError, Result};

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "Mozilla/5.0 (compatible; dk-scrape/2.0)";

/// Statuses worth retrying: rate limiting and transient server errors.
pub fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Base delay; doubles per attempt.
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Delay before the attempt following `attempt` (0-based), capped at 60s.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.min(6);
        std::cmp::min(self.backoff * factor, Duration::from_secs(60))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_RETRIES,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// HTTP client wrapping `reqwest` with a [`RetryPolicy`] and common headers.
pub struct RetryClient {
    client: Client,
    policy: RetryPolicy,
}

impl RetryClient {
    pub fn new() -> Result<Self> {
        Self::with_policy(RetryPolicy::default())
    }

    pub fn with_policy(policy: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, policy })
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// GET returning the raw response (status already verified successful).
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.send_with_retry(url, || self.client.request(Method::GET, url))
            .await
    }

    /// GET and deserialize a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .send_with_retry(url, || {
                self.client
                    .request(Method::GET, url)
                    .header(reqwest::header::ACCEPT, "application/json")
            })
            .await?;
        Ok(response.json::<T>().await?)
    }

    /// GET and return the body as text (HTML pages, CSV exports).
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        Ok(response.text().await?)
    }

    /// POST a JSON body and deserialize the JSON reply.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send_with_retry(url, || {
                self.client
                    .request(Method::POST, url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .json(body)
            })
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_with_retry<F>(&self, url: &str, build: F) -> Result<Response>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        loop {
            match build().send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if !is_retryable(status) {
                        match response.error_for_status() {
                            Ok(response) => return Ok(response),
                            Err(err) => return Err(err.into()),
                        }
                    }
                    if attempt >= self.policy.max_retries {
                        return Err(DkError::RetriesExhausted {
                            url: url.to_string(),
                            status,
                            attempts: attempt + 1,
                        });
                    }
                }
                Err(err) => {
                    let transient = err.is_timeout() || err.is_connect();
                    if !transient || attempt >= self.policy.max_retries {
                        return Err(err.into());
                    }
                }
            }

            tokio::time::sleep(self.policy.delay_for(attempt)).await;
            attempt += 1;
        }
    }
}
