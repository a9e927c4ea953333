//! Attendance record (`EduLink.Attendance`).
//!
//! The API versions this payload with a fixed `format` number; 3 is the
//! current shape.

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

const ATTENDANCE_FORMAT: u32 = 3;

#[derive(Debug, Deserialize)]
pub struct AttendanceParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn attendance(
    state: &PortalStateInner,
    params: AttendanceParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Attendance",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id, "format": ATTENDANCE_FORMAT }),
    )
    .await
}
