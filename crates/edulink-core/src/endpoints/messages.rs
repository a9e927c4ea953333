//! Messaging inbox (`EduLink.Communicator`).

use serde::Deserialize;

use super::{require_auth, send};
use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

const PER_PAGE: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct InboxParams {
    pub url: String,
    pub authtoken: String,
    /// 1-based; defaults to the first page.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

pub async fn inbox(
    state: &PortalStateInner,
    params: InboxParams,
) -> Result<ResponseEnvelope, PortalError> {
    require_auth(&params.url, &params.authtoken)?;
    let page = params.page.max(1);
    send(
        state,
        &params.url,
        "EduLink.Communicator",
        Some(&params.authtoken),
        serde_json::json!({ "action": "inbox", "page": page, "per_page": PER_PAGE }),
    )
    .await
}
