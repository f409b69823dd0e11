//! HTTP client for the review API
//!
//! One call per invocation: no retry, no caching. Retrying is the poll
//! loop's job.

use crate::{BotError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;

/// Source of homework status payloads
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetches the raw status payload for everything changed since `from_date`
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Builds the HTTP client used for outbound calls
///
/// No request timeout is configured: a poll blocks until the server
/// answers or the transport fails.
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`ReviewApi`] backed by the Practicum homework statuses endpoint
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Creates a client for `endpoint` authenticating with an OAuth `token`
    pub fn new(client: Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    fn connection_error(
        &self,
        from_date: i64,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> BotError {
        BotError::Connection {
            url: self.endpoint.clone(),
            from_date,
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl ReviewApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        tracing::info!(
            "Requesting homework statuses: {}, from_date={}",
            self.endpoint,
            from_date
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.connection_error(from_date, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read error body ({}): {}", status, e);
                    String::new()
                }
            };
            return Err(BotError::ResponseCode {
                url: self.endpoint.clone(),
                status: status.as_u16(),
                reason,
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.connection_error(from_date, e))?;
        let payload: Value =
            serde_json::from_slice(&body).map_err(|e| self.connection_error(from_date, e))?;

        tracing::info!("Homework statuses received");
        Ok(payload)
    }
}
