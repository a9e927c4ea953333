//! Clubs: listing, detail, and attendance toggling.
//!
//! Methods:
//! - `EduLink.Clubs`          — clubs available to a learner
//! - `EduLink.Club`           — one club's detail (sessions, members)
//! - `EduLink.ClubAttendance` — sign a learner up for / out of a club

use serde::Deserialize;

use super::{require, require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct ClubsParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn clubs(
    state: &PortalStateInner,
    params: ClubsParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Clubs",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id }),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct ClubDetailParams {
    pub url: String,
    pub authtoken: String,
    pub club_id: String,
}

pub async fn detail(
    state: &PortalStateInner,
    params: ClubDetailParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.club_id, "Club ID")?;
    send(
        state,
        &params.url,
        "EduLink.Club",
        Some(&params.authtoken),
        serde_json::json!({ "club_id": params.club_id }),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct ClubAttendanceParams {
    pub url: String,
    pub authtoken: String,
    pub club_id: String,
    pub learner_id: String,
    /// Omitted means signing up.
    #[serde(default = "default_attending")]
    pub attending: bool,
}

fn default_attending() -> bool {
    true
}

pub async fn attendance(
    state: &PortalStateInner,
    params: ClubAttendanceParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.club_id, "Club ID")?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.ClubAttendance",
        Some(&params.authtoken),
        serde_json::json!({
            "club_id": params.club_id,
            "learner_id": params.learner_id,
            "attending": params.attending,
        }),
    )
    .await
}
