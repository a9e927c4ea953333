//! Live transport over reqwest.

use async_trait::async_trait;

use super::{Transport, TransportRequest, TransportResponse};
use crate::error::PortalError;

/// Executes live calls: `POST <url>?method=<Name>` with the envelope as
/// the JSON body. Headers and body pass through unmodified; failures are
/// surfaced, never retried.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, req: TransportRequest) -> Result<TransportResponse, PortalError> {
        if req.url.trim().is_empty() {
            return Err(PortalError::Config("transport URL is empty".into()));
        }

        let mut builder = self
            .client
            .post(&req.url)
            .query(&[("method", req.method.as_str())])
            .header("X-API-Method", &req.method)
            .json(&req.body);
        if let Some(token) = &req.bearer {
            builder = builder.bearer_auth(token);
        }

        tracing::debug!(method = %req.method, url = %req.url, "issuing live portal call");

        let resp = builder
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;
        let status = resp.status().as_u16();

        // Non-2xx bodies are not inspected; decoding raises the status.
        let body = if (200..300).contains(&status) {
            resp.json::<serde_json::Value>()
                .await
                .map_err(|e| PortalError::Decode(format!("invalid JSON response: {}", e)))?
        } else {
            tracing::debug!(method = %req.method, status, "portal call returned non-OK status");
            serde_json::Value::Null
        };

        Ok(TransportResponse {
            status,
            body,
            from_fixture: false,
        })
    }
}
