//! School-provided external links and staff photo lookup.
//!
//! Methods:
//! - `EduLink.ExternalLinks` — links the school surfaces in its portal
//! - `EduLink.TeacherPhotos` — photos for a set of employee ids

use serde::Deserialize;

use super::{require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

/// Pixel width requested for staff photos.
const PHOTO_SIZE: u32 = 200;

#[derive(Debug, Deserialize)]
pub struct ExternalLinksParams {
    pub url: String,
    pub authtoken: String,
}

pub async fn external_links(
    state: &PortalStateInner,
    params: ExternalLinksParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    send(
        state,
        &params.url,
        "EduLink.ExternalLinks",
        Some(&params.authtoken),
        serde_json::json!({}),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct TeacherPhotosParams {
    pub url: String,
    pub authtoken: String,
    pub employee_ids: Vec<u32>,
}

pub async fn teacher_photos(
    state: &PortalStateInner,
    params: TeacherPhotosParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    if params.employee_ids.is_empty() {
        return Err(PortalError::MissingArgument(
            "Employee IDs are required".into(),
        ));
    }
    send(
        state,
        &params.url,
        "EduLink.TeacherPhotos",
        Some(&params.authtoken),
        serde_json::json!({ "employee_ids": params.employee_ids, "size": PHOTO_SIZE }),
    )
    .await
}
