//! Achievement record and the shared lookup tables.
//!
//! Methods:
//! - `EduLink.Achievement`                  — per-learner achievements
//! - `EduLink.AchievementBehaviourLookups`  — id → label tables used by
//!   both the achievement and behaviour views

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

const ACHIEVEMENT_FORMAT: u32 = 2;

#[derive(Debug, Deserialize)]
pub struct AchievementParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn achievement(
    state: &PortalStateInner,
    params: AchievementParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Achievement",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id, "format": ACHIEVEMENT_FORMAT }),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct LookupsParams {
    pub url: String,
    pub authtoken: String,
}

pub async fn lookups(
    state: &PortalStateInner,
    params: LookupsParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    send(
        state,
        &params.url,
        "EduLink.AchievementBehaviourLookups",
        Some(&params.authtoken),
        serde_json::json!({}),
    )
    .await
}
