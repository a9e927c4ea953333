//! Exam timetable and results (`EduLink.Exams`).

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct ExamsParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn exams(
    state: &PortalStateInner,
    params: ExamsParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Exams",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id }),
    )
    .await
}
