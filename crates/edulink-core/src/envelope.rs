//! JSON-RPC 2.0 envelope types for the EduLink wire format.
//!
//! These types are defined standalone (not tied to reqwest or any HTTP
//! layer) so they can be built and inspected in any transport context.
//!
//! A fresh correlation id (`uuid`) is generated for every outgoing
//! envelope; envelopes are never reused across calls.

use serde::{Deserialize, Serialize};

/// Outgoing JSON-RPC 2.0 request object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Always "2.0".
    pub jsonrpc: String,
    /// API method name, e.g. `"EduLink.Timetable"`.
    pub method: String,
    /// Method parameters (named fields, snake_case on the wire).
    pub params: serde_json::Value,
    /// Correlation id — a fresh v4 UUID per call.
    pub uuid: String,
    /// Request id; the portal API always sends "1".
    pub id: String,
}

impl RequestEnvelope {
    /// Build a fresh envelope for `method` with a new correlation id.
    pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            uuid: uuid::Uuid::new_v4().to_string(),
            id: "1".into(),
        }
    }
}

/// Incoming JSON-RPC 2.0 response object.
///
/// Treated as read-only by callers, which branch on
/// [`RpcResult::success`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub jsonrpc: String,
    pub result: RpcResult,
    /// Correlation id echoed from the request, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

/// The `result` member of a response.
///
/// `success == false` is a recoverable, expected outcome carrying a
/// human-readable `error` string — never a Rust error. All domain
/// fields are preserved verbatim in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    /// Per-method domain fields (timetable weeks, club lists, ...).
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Server-side call metrics attached to authenticated responses.
///
/// `uniqid` is the support correlation id surfaced to users on
/// application-level failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqid: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_correlation_id_per_envelope() {
        let a = RequestEnvelope::new("EduLink.Status", serde_json::json!({}));
        let b = RequestEnvelope::new("EduLink.Status", serde_json::json!({}));
        assert!(!a.uuid.is_empty());
        assert!(!b.uuid.is_empty());
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn test_request_envelope_wire_shape() {
        let env = RequestEnvelope::new(
            "EduLink.SchoolDetails",
            serde_json::json!({ "establishment_id": "1234" }),
        );
        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["method"], "EduLink.SchoolDetails");
        assert_eq!(wire["id"], "1");
        assert_eq!(wire["params"]["establishment_id"], "1234");
        assert!(wire["uuid"].as_str().is_some());
    }

    #[test]
    fn test_response_result_fields_preserved() {
        let raw = serde_json::json!({
            "jsonrpc": "2.0",
            "result": {
                "success": true,
                "method": "EduLink.SchoolDetails",
                "metrics": { "elapsed": 21, "timestamp": "2026-08-30 09:00:00" },
                "establishment": { "id": "1234", "name": "Test School" }
            },
            "uuid": "abc",
            "id": "1"
        });
        let env: ResponseEnvelope = serde_json::from_value(raw.clone()).unwrap();
        assert!(env.result.success);
        assert_eq!(
            env.result.fields["establishment"]["name"],
            "Test School"
        );
        // Round-trip: nothing renamed or dropped.
        let back = serde_json::to_value(&env).unwrap();
        assert_eq!(back["result"], raw["result"]);
    }

    #[test]
    fn test_application_failure_is_a_value() {
        let raw = serde_json::json!({
            "jsonrpc": "2.0",
            "result": {
                "success": false,
                "error": "The username or password is incorrect",
                "metrics": { "uniqid": "corr-99" }
            },
            "id": "1"
        });
        let env: ResponseEnvelope = serde_json::from_value(raw).unwrap();
        assert!(!env.result.success);
        assert_eq!(
            env.result.error.as_deref(),
            Some("The username or password is incorrect")
        );
        assert_eq!(
            env.result.metrics.unwrap().uniqid,
            Some(serde_json::json!("corr-99"))
        );
    }
}
