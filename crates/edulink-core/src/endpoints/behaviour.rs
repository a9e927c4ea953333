//! Behaviour record (`EduLink.Behaviour`).

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

const BEHAVIOUR_FORMAT: u32 = 2;

#[derive(Debug, Deserialize)]
pub struct BehaviourParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn behaviour(
    state: &PortalStateInner,
    params: BehaviourParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Behaviour",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id, "format": BEHAVIOUR_FORMAT }),
    )
    .await
}
