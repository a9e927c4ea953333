//! Homework listing (`EduLink.Homework`).
//!
//! Scoped by the session's learner server-side, so the only param is
//! the fixed payload format.

use serde::Deserialize;

use super::{require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

const HOMEWORK_FORMAT: u32 = 2;

#[derive(Debug, Deserialize)]
pub struct HomeworkParams {
    pub url: String,
    pub authtoken: String,
}

pub async fn homework(
    state: &PortalStateInner,
    params: HomeworkParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    send(
        state,
        &params.url,
        "EduLink.Homework",
        Some(&params.authtoken),
        serde_json::json!({ "format": HOMEWORK_FORMAT }),
    )
    .await
}
