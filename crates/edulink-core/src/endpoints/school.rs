//! Pre-authentication school resolution.
//!
//! Methods:
//! - `School.FromCode`        — resolve a school postcode-style code via
//!   the central provisioning server
//! - `EduLink.SchoolDetails`  — fetch a school's details (including its
//!   per-school API server URL) by establishment id

use serde::Deserialize;

use super::{require, require_id, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct FromCodeParams {
    pub code: String,
}

/// Resolve a school code against the provisioning server. Pre-auth; no
/// bearer token.
pub async fn from_code(
    state: &PortalStateInner,
    params: FromCodeParams,
) -> Result<ResponseEnvelope, PortalError> {
    require(&params.code, "School code")?;
    send(
        state,
        &state.provisioning_url,
        "School.FromCode",
        None,
        serde_json::json!({ "code": params.code.trim() }),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct SchoolDetailsParams {
    pub url: String,
    pub establishment_id: u32,
}

/// Fetch school details from the school's own API server. The
/// establishment id travels as a string on the wire.
pub async fn details(
    state: &PortalStateInner,
    params: SchoolDetailsParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_id(params.establishment_id, "School ID")?;
    require(&params.url, "API URL")?;
    send(
        state,
        &params.url,
        "EduLink.SchoolDetails",
        None,
        serde_json::json!({
            "establishment_id": params.establishment_id.to_string(),
            "from_app": false,
        }),
    )
    .await
}
