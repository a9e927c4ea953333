//! `edulink login` / `edulink status` — session management.

use edulink_core::endpoints::auth::{LoginParams, StatusParams};
use edulink_core::PortalClient;

use super::{finish, print_json, Auth};
use crate::config::{self, Session};

/// Extract a field that a school server may send as either a string or
/// a number.
fn field_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Sign in and, on success, persist the session for later commands. A
/// `success: false` result clears any stored session (stale tokens are
/// worse than none) and surfaces the API's error string.
pub async fn login(
    client: &PortalClient,
    url: &str,
    school_id: u32,
    username: &str,
    password: &str,
    persist: bool,
) -> Result<(), String> {
    let env = client
        .login(LoginParams {
            url: url.into(),
            establishment_id: school_id,
            username: username.into(),
            password: password.into(),
        })
        .await
        .map_err(|e| e.to_string())?;

    if !env.result.success {
        config::clear();
        return finish(&env);
    }

    let token = env
        .result
        .fields
        .get("authtoken")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    // Parents get a children list; learners are the user themselves.
    let learner_id = env
        .result
        .fields
        .get("children")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("id"))
        .or_else(|| env.result.fields.get("user").and_then(|u| u.get("id")))
        .map(field_string);

    if persist && !token.is_empty() {
        config::save(&Session {
            url: Some(url.into()),
            token: Some(token),
            learner_id,
            establishment_id: Some(school_id),
        })?;
        tracing::info!("session saved");
    }

    print_json(&serde_json::to_value(&env.result).unwrap_or_default());
    Ok(())
}

pub async fn status(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .status(StatusParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}
