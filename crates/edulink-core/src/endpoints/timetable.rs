//! Learner timetable (`EduLink.Timetable`).

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct TimetableParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
    /// `YYYY-MM-DD`; defaults to today.
    #[serde(default)]
    pub date: Option<String>,
}

pub async fn timetable(
    state: &PortalStateInner,
    params: TimetableParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    let date = params
        .date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    send(
        state,
        &params.url,
        "EduLink.Timetable",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id, "date": date }),
    )
    .await
}
