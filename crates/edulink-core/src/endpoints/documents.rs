//! Documents: listing and single-document download.
//!
//! Methods:
//! - `EduLink.Documents` — documents available for a learner
//! - `EduLink.Document`  — one document's detail, with its content
//!   base64-encoded in the result

use serde::Deserialize;

use super::{require, require_auth, require_id, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

#[derive(Debug, Deserialize)]
pub struct DocumentsParams {
    pub url: String,
    pub authtoken: String,
    pub learner_id: String,
}

pub async fn documents(
    state: &PortalStateInner,
    params: DocumentsParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require(&params.learner_id, "Learner ID")?;
    send(
        state,
        &params.url,
        "EduLink.Documents",
        Some(&params.authtoken),
        serde_json::json!({ "learner_id": params.learner_id }),
    )
    .await
}

#[derive(Debug, Deserialize)]
pub struct DocumentParams {
    pub url: String,
    pub authtoken: String,
    pub document_id: u32,
}

pub async fn document(
    state: &PortalStateInner,
    params: DocumentParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    require_id(params.document_id, "Document ID")?;
    send(
        state,
        &params.url,
        "EduLink.Document",
        Some(&params.authtoken),
        serde_json::json!({ "document_id": params.document_id }),
    )
    .await
}
