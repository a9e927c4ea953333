//! Offline demo transport backed by recorded fixture files.
//!
//! Demo URLs have the form `demo/<role>` with
//! `role ∈ {parent, employee, learner}`. A call for method
//! `Folder.Subfolder` resolves, in order:
//!
//! 1. `<root>/Folder/Subfolder/<role>/Folder.Subfolder.json`
//! 2. `<root>/Folder/Folder.Subfolder.json`
//!
//! The first path that exists wins. A miss on both is a test-data bug
//! and fails with an error naming the method.

use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;

use super::{Transport, TransportRequest, TransportResponse};
use crate::error::PortalError;

/// Synthetic account role a demo session impersonates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoRole {
    Parent,
    Employee,
    Learner,
}

impl DemoRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoRole::Parent => "parent",
            DemoRole::Employee => "employee",
            DemoRole::Learner => "learner",
        }
    }

    /// The demo-mode URL for this role, e.g. `demo/learner`.
    pub fn url(&self) -> String {
        format!("demo/{}", self.as_str())
    }
}

impl FromStr for DemoRole {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(DemoRole::Parent),
            "employee" => Ok(DemoRole::Employee),
            "learner" => Ok(DemoRole::Learner),
            other => Err(PortalError::Config(format!(
                "invalid demo role '{}', expected parent, employee or learner",
                other
            ))),
        }
    }
}

impl std::fmt::Display for DemoRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves calls against a fixture tree instead of the network.
pub struct DemoTransport {
    root: PathBuf,
}

impl DemoTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Candidate fixture paths for `method` under `role`, most specific
    /// first.
    fn candidates(&self, method: &str, role: DemoRole) -> Vec<PathBuf> {
        let file = format!("{}.json", method);
        match method.split_once('.') {
            Some((folder, subfolder)) => vec![
                self.root
                    .join(folder)
                    .join(subfolder)
                    .join(role.as_str())
                    .join(&file),
                self.root.join(folder).join(&file),
            ],
            None => vec![self.root.join(&file)],
        }
    }
}

/// Extract the role segment from a `demo/<role>` URL.
fn role_from_url(url: &str) -> Result<DemoRole, PortalError> {
    let path = url.split('?').next().unwrap_or(url);
    let segment = path
        .strip_prefix("demo/")
        .ok_or_else(|| PortalError::Config(format!("not a demo URL: '{}'", url)))?;
    segment.trim_end_matches('/').parse()
}

#[async_trait]
impl Transport for DemoTransport {
    async fn execute(&self, req: TransportRequest) -> Result<TransportResponse, PortalError> {
        let role = role_from_url(&req.url)?;
        if req.method.is_empty() {
            return Err(PortalError::Fixture(
                "demo call is missing a method name".into(),
            ));
        }

        for path in self.candidates(&req.method, role) {
            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => {
                    tracing::debug!(method = %req.method, path = %path.display(), "resolved demo fixture");
                    let body = serde_json::from_str(&raw).map_err(|e| {
                        PortalError::Fixture(format!(
                            "fixture for {} is not valid JSON: {}",
                            req.method, e
                        ))
                    })?;
                    return Ok(TransportResponse {
                        status: 200,
                        body,
                        from_fixture: true,
                    });
                }
                Err(_) => continue,
            }
        }

        Err(PortalError::Fixture(format!(
            "no demo fixture found for method {} (role {})",
            req.method, role
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, method: &str) -> TransportRequest {
        TransportRequest {
            url: url.into(),
            method: method.into(),
            bearer: None,
            body: serde_json::json!({}),
        }
    }

    fn envelope(marker: &str) -> String {
        format!(
            r#"{{"jsonrpc":"2.0","result":{{"success":true,"marker":"{}"}},"id":"1"}}"#,
            marker
        )
    }

    #[tokio::test]
    async fn test_role_specific_fixture_wins_over_generic() {
        let dir = tempfile::tempdir().unwrap();
        let specific = dir.path().join("EduLink/Clubs/learner");
        std::fs::create_dir_all(&specific).unwrap();
        std::fs::write(specific.join("EduLink.Clubs.json"), envelope("specific")).unwrap();
        std::fs::write(
            dir.path().join("EduLink/EduLink.Clubs.json"),
            envelope("generic"),
        )
        .unwrap();

        let transport = DemoTransport::new(dir.path());
        let resp = transport
            .execute(request("demo/learner", "EduLink.Clubs"))
            .await
            .unwrap();
        assert!(resp.from_fixture);
        assert_eq!(resp.body["result"]["marker"], "specific");
    }

    #[tokio::test]
    async fn test_falls_back_to_generic_fixture() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("EduLink")).unwrap();
        std::fs::write(
            dir.path().join("EduLink/EduLink.Clubs.json"),
            envelope("generic"),
        )
        .unwrap();

        let transport = DemoTransport::new(dir.path());
        let resp = transport
            .execute(request("demo/learner", "EduLink.Clubs"))
            .await
            .unwrap();
        assert_eq!(resp.body["result"]["marker"], "generic");
    }

    #[tokio::test]
    async fn test_miss_names_the_method() {
        let dir = tempfile::tempdir().unwrap();
        let transport = DemoTransport::new(dir.path());
        let err = transport
            .execute(request("demo/learner", "EduLink.Clubs"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("EduLink.Clubs"));
    }

    #[tokio::test]
    async fn test_invalid_role_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let transport = DemoTransport::new(dir.path());
        let err = transport
            .execute(request("demo/admin", "EduLink.Clubs"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("learner".parse::<DemoRole>().unwrap(), DemoRole::Learner);
        assert_eq!("parent".parse::<DemoRole>().unwrap(), DemoRole::Parent);
        assert_eq!("employee".parse::<DemoRole>().unwrap(), DemoRole::Employee);
        assert!("staff".parse::<DemoRole>().is_err());
        assert_eq!(DemoRole::Learner.url(), "demo/learner");
    }
}
