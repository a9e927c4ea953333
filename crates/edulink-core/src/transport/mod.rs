//! Transport adapters for the portal wire protocol.
//!
//! A [`Transport`] executes one HTTP-POST-shaped exchange. Exactly one
//! implementation is selected when the client is constructed (dependency
//! injection, never per-call branching):
//!
//! - [`HttpTransport`] — live calls over reqwest
//! - [`DemoTransport`] — offline fixture resolution, keyed by a
//!   synthetic account role
//!
//! No caching, no retries, and no timeouts live at this layer.

mod demo;
mod http;

pub use demo::{DemoRole, DemoTransport};
pub use http::HttpTransport;

use async_trait::async_trait;

use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

/// One outgoing exchange, as handed to a transport by an endpoint handler.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Target base URL. For demo calls this is `demo/<role>`.
    pub url: String,
    /// API method name; becomes the `method` query parameter and the
    /// `X-API-Method` header on live calls, and the fixture key on demo
    /// calls.
    pub method: String,
    /// Bearer token for authenticated endpoints.
    pub bearer: Option<String>,
    /// Serialized request envelope.
    pub body: serde_json::Value,
}

/// Raw transport outcome, before envelope decoding.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status; fixtures report 200.
    pub status: u16,
    /// Parsed JSON body. `Null` when a live call returned a non-2xx
    /// status (the body is not inspected in that case).
    pub body: serde_json::Value,
    /// True when the body came from a demo fixture and has no HTTP layer.
    pub from_fixture: bool,
}

impl TransportResponse {
    /// Decode into a [`ResponseEnvelope`].
    ///
    /// Fixture bodies are parsed directly, bypassing the HTTP status
    /// check; live bodies are only parsed after a 2xx status.
    pub fn into_envelope(self) -> Result<ResponseEnvelope, PortalError> {
        if !self.from_fixture && !(200..300).contains(&self.status) {
            return Err(PortalError::Http {
                status: self.status,
            });
        }
        serde_json::from_value(self.body)
            .map_err(|e| PortalError::Decode(format!("invalid response envelope: {}", e)))
    }
}

/// Executes one wire exchange. Object-safe so the client can hold an
/// `Arc<dyn Transport>` chosen once at process start.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, req: TransportRequest) -> Result<TransportResponse, PortalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_ok_status_is_a_transport_error() {
        let resp = TransportResponse {
            status: 500,
            body: serde_json::Value::Null,
            from_fixture: false,
        };
        let err = resp.into_envelope().unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_fixture_body_bypasses_status_check() {
        let resp = TransportResponse {
            status: 0,
            body: serde_json::json!({
                "jsonrpc": "2.0",
                "result": { "success": true },
                "id": "1"
            }),
            from_fixture: true,
        };
        let env = resp.into_envelope().unwrap();
        assert!(env.result.success);
    }
}
