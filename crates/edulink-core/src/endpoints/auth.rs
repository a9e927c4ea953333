//! Account sign-in and session status polling.
//!
//! Methods:
//! - `EduLink.Login`  — authenticate; the result carries the `authtoken`
//!   every other endpoint needs
//! - `EduLink.Status` — session heartbeat / status poll

use serde::Deserialize;

use super::{require, require_auth, require_id, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub url: String,
    pub establishment_id: u32,
    pub username: String,
    pub password: String,
}

/// Sign in. Pre-auth; a `success: false` result is the normal "wrong
/// credentials" outcome and carries the API's error string.
pub async fn login(
    state: &PortalStateInner,
    params: LoginParams,
) -> Result<ResponseEnvelope, PortalError> {
    require(&params.url, "API URL")?;
    require_id(params.establishment_id, "School ID")?;
    require(&params.username, "Username")?;
    require(&params.password, "Password")?;
    send(
        state,
        &params.url,
        "EduLink.Login",
        None,
        serde_json::json!({
            "username": params.username,
            "password": params.password,
            "establishment_id": params.establishment_id,
            "fcm_token_old": "none",
            "from_app": false,
        }),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub url: String,
    pub authtoken: String,
}

pub async fn status(
    state: &PortalStateInner,
    params: StatusParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    send(
        state,
        &params.url,
        "EduLink.Status",
        Some(&params.authtoken),
        serde_json::json!({}),
    )
    .await
}
