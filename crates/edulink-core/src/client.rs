//! The portal client facade.
//!
//! [`PortalClient`] is the single object application code calls through
//! to reach every remote operation. It is constructed in one step from
//! the static registration table — there is no readiness state to await
//! — and is immutable thereafter. Calls are stateless and independent:
//! each builds its own envelope and reads its own response, so any
//! number may be in flight concurrently. Cancellation is dropping the
//! future.

use std::sync::Arc;

use crate::endpoints::{self, achievements, attendance, auth, behaviour, clubs, documents, exams,
    forms, homework, links, messages, school, timetable};
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;
use crate::registry::EndpointRegistry;
use crate::transport::Transport;

/// Central provisioning server used by pre-auth school-code lookup.
pub const DEFAULT_PROVISIONING_URL: &str = "https://provisioning.edulinkone.com";

/// Shared state handed to every endpoint handler.
pub struct PortalStateInner {
    pub transport: Arc<dyn Transport>,
    pub provisioning_url: String,
}

pub type PortalState = Arc<PortalStateInner>;

/// Facade over all portal endpoints. Cheap to clone.
#[derive(Clone)]
pub struct PortalClient {
    state: PortalState,
    registry: EndpointRegistry,
}

impl PortalClient {
    /// Build a client over the given transport, with the default
    /// provisioning server.
    pub fn new(transport: Arc<dyn Transport>) -> Result<Self, PortalError> {
        Self::with_provisioning_url(transport, DEFAULT_PROVISIONING_URL)
    }

    /// Build a client with an explicit provisioning server URL.
    pub fn with_provisioning_url(
        transport: Arc<dyn Transport>,
        provisioning_url: impl Into<String>,
    ) -> Result<Self, PortalError> {
        let registry = EndpointRegistry::from_table(endpoints::endpoint_table())?;
        Ok(Self {
            state: Arc::new(PortalStateInner {
                transport,
                provisioning_url: provisioning_url.into(),
            }),
            registry,
        })
    }

    /// All registered API method names.
    pub fn method_list(&self) -> Vec<&'static str> {
        self.registry.method_list()
    }

    /// String-named dispatch through the registry. Used by the CLI's
    /// raw `call` command; typed callers use the named methods below.
    pub async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<ResponseEnvelope, PortalError> {
        self.registry.dispatch(&self.state, method, params).await
    }

    // ----- Pre-authentication -----

    pub async fn school_from_code(
        &self,
        params: school::FromCodeParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        school::from_code(&self.state, params).await
    }

    pub async fn school_details(
        &self,
        params: school::SchoolDetailsParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        school::details(&self.state, params).await
    }

    pub async fn login(
        &self,
        params: auth::LoginParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        auth::login(&self.state, params).await
    }

    // ----- Authenticated -----

    pub async fn status(
        &self,
        params: auth::StatusParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        auth::status(&self.state, params).await
    }

    pub async fn timetable(
        &self,
        params: timetable::TimetableParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        timetable::timetable(&self.state, params).await
    }

    pub async fn attendance(
        &self,
        params: attendance::AttendanceParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        attendance::attendance(&self.state, params).await
    }

    pub async fn behaviour(
        &self,
        params: behaviour::BehaviourParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        behaviour::behaviour(&self.state, params).await
    }

    pub async fn achievement(
        &self,
        params: achievements::AchievementParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        achievements::achievement(&self.state, params).await
    }

    pub async fn achievement_behaviour_lookups(
        &self,
        params: achievements::LookupsParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        achievements::lookups(&self.state, params).await
    }

    pub async fn clubs(
        &self,
        params: clubs::ClubsParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        clubs::clubs(&self.state, params).await
    }

    pub async fn club_detail(
        &self,
        params: clubs::ClubDetailParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        clubs::detail(&self.state, params).await
    }

    pub async fn club_attendance(
        &self,
        params: clubs::ClubAttendanceParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        clubs::attendance(&self.state, params).await
    }

    pub async fn documents(
        &self,
        params: documents::DocumentsParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        documents::documents(&self.state, params).await
    }

    pub async fn document(
        &self,
        params: documents::DocumentParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        documents::document(&self.state, params).await
    }

    pub async fn homework(
        &self,
        params: homework::HomeworkParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        homework::homework(&self.state, params).await
    }

    pub async fn exams(
        &self,
        params: exams::ExamsParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        exams::exams(&self.state, params).await
    }

    pub async fn forms(
        &self,
        params: forms::FormsParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        forms::forms(&self.state, params).await
    }

    pub async fn external_links(
        &self,
        params: links::ExternalLinksParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        links::external_links(&self.state, params).await
    }

    pub async fn teacher_photos(
        &self,
        params: links::TeacherPhotosParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        links::teacher_photos(&self.state, params).await
    }

    pub async fn inbox(
        &self,
        params: messages::InboxParams,
    ) -> Result<ResponseEnvelope, PortalError> {
        messages::inbox(&self.state, params).await
    }
}
