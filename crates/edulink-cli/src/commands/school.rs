//! `edulink school` — pre-auth school resolution.

use edulink_core::endpoints::school::{FromCodeParams, SchoolDetailsParams};
use edulink_core::PortalClient;

use super::finish;

pub async fn from_code(client: &PortalClient, code: &str) -> Result<(), String> {
    let env = client
        .school_from_code(FromCodeParams { code: code.into() })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn details(client: &PortalClient, url: &str, id: u32) -> Result<(), String> {
    let env = client
        .school_details(SchoolDetailsParams {
            url: url.into(),
            establishment_id: id,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}
