//! School forms for a learner (`EduLink.Forms`).

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct FormsParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn forms(
    state: &PortalStateInner,
    params: FormsParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Forms",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id }),
    )
    .await
}
