//! Per-domain view commands: timetable, attendance, behaviour,
//! achievements, clubs, homework, exams, documents, messages.
//!
//! Each one resolves the learner id, issues the call, and pretty-prints
//! the envelope's result.

use edulink_core::endpoints::{
    achievements, attendance, behaviour, clubs, documents, exams, forms, homework, links,
    messages, timetable,
};
use edulink_core::PortalClient;

use super::{finish, Auth};

fn learner(auth: &Auth) -> Result<String, String> {
    auth.learner_id
        .clone()
        .ok_or_else(|| "Learner ID is required; login first or pass --learner".into())
}

pub async fn timetable(
    client: &PortalClient,
    auth: &Auth,
    date: Option<String>,
) -> Result<(), String> {
    let env = client
        .timetable(timetable::TimetableParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
            learner_id: learner(auth)?,
            date,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn attendance(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .attendance(attendance::AttendanceParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
            learner_id: learner(auth)?,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn behaviour(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .behaviour(behaviour::BehaviourParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
            learner_id: learner(auth)?,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn achievements(
    client: &PortalClient,
    auth: &Auth,
    lookups: bool,
) -> Result<(), String> {
    let env = if lookups {
        client
            .achievement_behaviour_lookups(achievements::LookupsParams {
                url: auth.url.clone(),
                authtoken: auth.token.clone(),
            })
            .await
    } else {
        client
            .achievement(achievements::AchievementParams {
                url: auth.url.clone(),
                authtoken: auth.token.clone(),
                learner_id: learner(auth)?,
            })
            .await
    }
    .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn clubs(
    client: &PortalClient,
    auth: &Auth,
    club_id: Option<String>,
) -> Result<(), String> {
    let env = match club_id {
        Some(id) => {
            client
                .club_detail(clubs::ClubDetailParams {
                    url: auth.url.clone(),
                    authtoken: auth.token.clone(),
                    club_id: id,
                })
                .await
        }
        None => {
            client
                .clubs(clubs::ClubsParams {
                    url: auth.url.clone(),
                    authtoken: auth.token.clone(),
                    learner_id: learner(auth)?,
                })
                .await
        }
    }
    .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn homework(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .homework(homework::HomeworkParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn exams(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .exams(exams::ExamsParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
            learner_id: learner(auth)?,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn forms(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .forms(forms::FormsParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
            learner_id: learner(auth)?,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn links(client: &PortalClient, auth: &Auth) -> Result<(), String> {
    let env = client
        .external_links(links::ExternalLinksParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn documents(
    client: &PortalClient,
    auth: &Auth,
    document_id: Option<u32>,
) -> Result<(), String> {
    let env = match document_id {
        Some(id) => {
            client
                .document(documents::DocumentParams {
                    url: auth.url.clone(),
                    authtoken: auth.token.clone(),
                    document_id: id,
                })
                .await
        }
        None => {
            client
                .documents(documents::DocumentsParams {
                    url: auth.url.clone(),
                    authtoken: auth.token.clone(),
                    learner_id: learner(auth)?,
                })
                .await
        }
    }
    .map_err(|e| e.to_string())?;
    finish(&env)
}

pub async fn messages(client: &PortalClient, auth: &Auth, page: u32) -> Result<(), String> {
    let env = client
        .inbox(messages::InboxParams {
            url: auth.url.clone(),
            authtoken: auth.token.clone(),
            page,
        })
        .await
        .map_err(|e| e.to_string())?;
    finish(&env)
}
