//! Typed endpoint handlers, one module per portal domain.
//!
//! Every handler follows the same contract: validate each required
//! argument (fail fast, before any I/O), shape the method's params,
//! build a fresh [`RequestEnvelope`], hand it to the transport, and
//! decode the reply. Authenticated endpoints attach a bearer token from
//! the caller-supplied `authtoken`; pre-authentication endpoints
//! (school lookup, login) do not.
//!
//! [`endpoint_table`] is the full registration table the
//! [`EndpointRegistry`](crate::registry::EndpointRegistry) is built from.

pub mod achievements;
pub mod attendance;
pub mod auth;
pub mod behaviour;
pub mod clubs;
pub mod documents;
pub mod exams;
pub mod forms;
pub mod homework;
pub mod links;
pub mod messages;
pub mod school;
pub mod timetable;

use crate::client::PortalStateInner;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::error::PortalError;
use crate::registry::{EndpointDef, HandlerFuture};
use crate::transport::TransportRequest;

/// Reject an empty required string argument.
pub(crate) fn require(value: &str, what: &str) -> Result<(), PortalError> {
    if value.trim().is_empty() {
        return Err(PortalError::MissingArgument(format!("{} is required", what)));
    }
    Ok(())
}

/// Reject a zero numeric id.
pub(crate) fn require_id(value: u32, what: &str) -> Result<(), PortalError> {
    if value == 0 {
        return Err(PortalError::MissingArgument(format!("{} is required", what)));
    }
    Ok(())
}

/// Validate the pair every authenticated endpoint needs.
pub(crate) fn require_auth(url: &str, authtoken: &str) -> Result<(), PortalError> {
    require(url, "API URL")?;
    require(authtoken, "Auth token")
}

/// Build the envelope for `method`, execute it, and decode the reply.
pub(crate) async fn send(
    state: &PortalStateInner,
    url: &str,
    method: &str,
    bearer: Option<&str>,
    params: serde_json::Value,
) -> Result<ResponseEnvelope, PortalError> {
    let envelope = RequestEnvelope::new(method, params);
    tracing::debug!(method, uuid = %envelope.uuid, "dispatching portal call");
    let body = serde_json::to_value(&envelope)
        .map_err(|e| PortalError::Decode(format!("failed to serialize envelope: {}", e)))?;
    let resp = state
        .transport
        .execute(TransportRequest {
            url: url.to_string(),
            method: method.to_string(),
            bearer: bearer.map(str::to_string),
            body,
        })
        .await?;
    resp.into_envelope()
}

/// Deserialize dynamic-dispatch params into a handler's typed struct.
fn parse_params<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, PortalError> {
    serde_json::from_value(value)
        .map_err(|e| PortalError::MissingArgument(format!("Invalid params: {}", e)))
}

/// Adapters from JSON params to the typed handlers, as installed in the
/// registration table.
mod adapters {
    use super::*;

    pub fn school_from_code(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { school::from_code(state, parse_params(p)?).await })
    }

    pub fn school_details(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { school::details(state, parse_params(p)?).await })
    }

    pub fn login(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { auth::login(state, parse_params(p)?).await })
    }

    pub fn status(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { auth::status(state, parse_params(p)?).await })
    }

    pub fn timetable(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { timetable::timetable(state, parse_params(p)?).await })
    }

    pub fn attendance(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { attendance::attendance(state, parse_params(p)?).await })
    }

    pub fn behaviour(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { behaviour::behaviour(state, parse_params(p)?).await })
    }

    pub fn achievement(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { achievements::achievement(state, parse_params(p)?).await })
    }

    pub fn lookups(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { achievements::lookups(state, parse_params(p)?).await })
    }

    pub fn clubs(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { clubs::clubs(state, parse_params(p)?).await })
    }

    pub fn club_detail(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { clubs::detail(state, parse_params(p)?).await })
    }

    pub fn club_attendance(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { clubs::attendance(state, parse_params(p)?).await })
    }

    pub fn documents(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { documents::documents(state, parse_params(p)?).await })
    }

    pub fn document(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { documents::document(state, parse_params(p)?).await })
    }

    pub fn homework(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { homework::homework(state, parse_params(p)?).await })
    }

    pub fn exams(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { exams::exams(state, parse_params(p)?).await })
    }

    pub fn forms(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { forms::forms(state, parse_params(p)?).await })
    }

    pub fn external_links(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { links::external_links(state, parse_params(p)?).await })
    }

    pub fn teacher_photos(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { links::teacher_photos(state, parse_params(p)?).await })
    }

    pub fn inbox(state: &PortalStateInner, p: serde_json::Value) -> HandlerFuture<'_> {
        Box::pin(async move { messages::inbox(state, parse_params(p)?).await })
    }
}

/// The full, statically written registration table. Names are unique by
/// construction; the registry rejects the table otherwise.
pub fn endpoint_table() -> &'static [EndpointDef] {
    const TABLE: &[EndpointDef] = &[
        EndpointDef {
            name: "School.FromCode",
            handler: adapters::school_from_code,
        },
        EndpointDef {
            name: "EduLink.SchoolDetails",
            handler: adapters::school_details,
        },
        EndpointDef {
            name: "EduLink.Login",
            handler: adapters::login,
        },
        EndpointDef {
            name: "EduLink.Status",
            handler: adapters::status,
        },
        EndpointDef {
            name: "EduLink.Timetable",
            handler: adapters::timetable,
        },
        EndpointDef {
            name: "EduLink.Attendance",
            handler: adapters::attendance,
        },
        EndpointDef {
            name: "EduLink.Behaviour",
            handler: adapters::behaviour,
        },
        EndpointDef {
            name: "EduLink.Achievement",
            handler: adapters::achievement,
        },
        EndpointDef {
            name: "EduLink.AchievementBehaviourLookups",
            handler: adapters::lookups,
        },
        EndpointDef {
            name: "EduLink.Clubs",
            handler: adapters::clubs,
        },
        EndpointDef {
            name: "EduLink.Club",
            handler: adapters::club_detail,
        },
        EndpointDef {
            name: "EduLink.ClubAttendance",
            handler: adapters::club_attendance,
        },
        EndpointDef {
            name: "EduLink.Documents",
            handler: adapters::documents,
        },
        EndpointDef {
            name: "EduLink.Document",
            handler: adapters::document,
        },
        EndpointDef {
            name: "EduLink.Homework",
            handler: adapters::homework,
        },
        EndpointDef {
            name: "EduLink.Exams",
            handler: adapters::exams,
        },
        EndpointDef {
            name: "EduLink.Forms",
            handler: adapters::forms,
        },
        EndpointDef {
            name: "EduLink.ExternalLinks",
            handler: adapters::external_links,
        },
        EndpointDef {
            name: "EduLink.TeacherPhotos",
            handler: adapters::teacher_photos,
        },
        EndpointDef {
            name: "EduLink.Communicator",
            handler: adapters::inbox,
        },
    ];
    TABLE
}
