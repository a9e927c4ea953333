//! CLI command implementations.
//!
//! Each submodule corresponds to a top-level CLI command and drives the
//! portal through `edulink_core::PortalClient`. Commands return
//! `Result<(), String>`; `main` prints the error and exits non-zero.

pub mod auth;
pub mod call;
pub mod school;
pub mod views;

use std::sync::Arc;

use edulink_core::{DemoRole, DemoTransport, HttpTransport, PortalClient, ResponseEnvelope};

use crate::config;

/// Build the client once, choosing the transport for the whole session:
/// live reqwest, or fixture resolution when a demo role is given. In
/// demo mode the provisioning URL is the demo URL too, so pre-auth
/// lookups resolve fixtures as well.
pub fn build_client(demo: Option<DemoRole>, fixtures: &str) -> Result<PortalClient, String> {
    match demo {
        Some(role) => PortalClient::with_provisioning_url(
            Arc::new(DemoTransport::new(fixtures)),
            role.url(),
        )
        .map_err(|e| e.to_string()),
        None => PortalClient::new(Arc::new(HttpTransport::new())).map_err(|e| e.to_string()),
    }
}

/// Resolved target for authenticated commands.
pub struct Auth {
    pub url: String,
    pub token: String,
    pub learner_id: Option<String>,
}

/// Merge CLI flags with the persisted session; demo mode needs neither.
pub fn resolve_auth(
    demo: Option<DemoRole>,
    url: Option<String>,
    token: Option<String>,
    learner: Option<String>,
) -> Result<Auth, String> {
    if let Some(role) = demo {
        return Ok(Auth {
            url: role.url(),
            token: "demo".into(),
            learner_id: learner.or_else(|| Some("demo".into())),
        });
    }
    let session = config::load();
    let url = url
        .or(session.url)
        .ok_or("API URL is not set; pass --url or login first")?;
    let token = token
        .or(session.token)
        .ok_or("Auth token is not set; pass --token or login first")?;
    Ok(Auth {
        url,
        token,
        learner_id: learner.or(session.learner_id),
    })
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}

/// Print an envelope's result and map an application-level failure to a
/// command error carrying the API's message and support id.
pub(crate) fn finish(env: &ResponseEnvelope) -> Result<(), String> {
    print_json(&serde_json::to_value(&env.result).unwrap_or_default());
    if env.result.success {
        return Ok(());
    }
    let message = env
        .result
        .error
        .clone()
        .unwrap_or_else(|| "request failed".into());
    match env
        .result
        .metrics
        .as_ref()
        .and_then(|m| m.uniqid.as_ref())
    {
        Some(uniqid) => Err(format!("{} (support id {})", message, uniqid)),
        None => Err(message),
    }
}
