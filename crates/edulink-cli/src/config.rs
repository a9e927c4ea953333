//! Persisted CLI session.
//!
//! After a successful login the CLI stores the school's API URL, the
//! bearer token, and the learner id under the user config directory
//! (`<config>/edulink/session.json`) so subsequent view commands work
//! without re-authenticating. The file is plain JSON; clearing it is
//! how the CLI "logs out".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub url: Option<String>,
    pub token: Option<String>,
    pub learner_id: Option<String>,
    pub establishment_id: Option<u32>,
}

/// `<config>/edulink/session.json`, when a config directory exists.
pub fn session_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("edulink").join("session.json"))
}

/// Load the persisted session; a missing or unreadable file is an
/// empty session.
pub fn load() -> Session {
    session_path()
        .map(|p| load_from(&p))
        .unwrap_or_default()
}

pub fn load_from(path: &Path) -> Session {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save(session: &Session) -> Result<(), String> {
    let path = session_path().ok_or("no config directory available")?;
    save_to(&path, session)
}

pub fn save_to(path: &Path, session: &Session) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
    }
    let raw = serde_json::to_string_pretty(session)
        .map_err(|e| format!("failed to serialize session: {}", e))?;
    std::fs::write(path, raw).map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

/// Remove the persisted session, if any.
pub fn clear() {
    if let Some(path) = session_path() {
        let _ = std::fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edulink").join("session.json");

        let session = Session {
            url: Some("https://api.example.test".into()),
            token: Some("tok".into()),
            learner_id: Some("777".into()),
            establishment_id: Some(1234),
        };
        save_to(&path, &session).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.url.as_deref(), Some("https://api.example.test"));
        assert_eq!(loaded.token.as_deref(), Some("tok"));
        assert_eq!(loaded.learner_id.as_deref(), Some("777"));
        assert_eq!(loaded.establishment_id, Some(1234));
    }

    #[test]
    fn test_missing_file_is_an_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("nope.json"));
        assert!(loaded.url.is_none());
        assert!(loaded.token.is_none());
    }
}
