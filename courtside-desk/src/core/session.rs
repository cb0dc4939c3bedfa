//! Auth session store
//!
//! Holds the signed-in user's token and profile, with the expiry
//! instant parsed out of the JWT payload. The active session is
//! persisted under `{work_dir}/auth/current_session.json` so a restart
//! resumes login; signing out tears the file down.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::client::UserProfile;
use shared::models::Role;

use crate::error::DeskResult;

/// A signed-in session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub profile: UserProfile,
    /// Unix timestamp of token expiry, when the JWT carries one
    pub expires_at: Option<u64>,
    pub logged_in_at: u64,
}

impl AuthSession {
    /// Build a session from a freshly issued token and profile.
    pub fn new(token: String, profile: UserProfile) -> Self {
        let expires_at = parse_jwt_exp(&token);
        Self {
            token,
            profile,
            expires_at,
            logged_in_at: unix_now(),
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role
    }

    /// Whether the token has passed its expiry instant.
    pub fn is_expired(&self, now: u64) -> bool {
        matches!(self.expires_at, Some(exp) if now > exp)
    }
}

/// Current Unix timestamp in seconds.
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Parse the `exp` claim out of a JWT without verifying the signature.
///
/// Verification belongs to the server; the desk only needs the expiry
/// instant to decide when to route back to login.
pub fn parse_jwt_exp(token: &str) -> Option<u64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

/// File-backed persistence for the active session
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            file_path: work_dir.join("auth/current_session.json"),
        }
    }

    /// Persist the active session.
    pub fn save(&self, session: &AuthSession) -> DeskResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(username = %session.profile.username, "session saved");
        Ok(())
    }

    /// Load the persisted session, dropping it when expired.
    pub fn load(&self) -> DeskResult<Option<AuthSession>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        let session: AuthSession = serde_json::from_str(&content)?;

        if session.is_expired(unix_now()) {
            let _ = std::fs::remove_file(&self.file_path);
            tracing::info!(username = %session.profile.username, "cached session expired, cleared");
            return Ok(None);
        }

        tracing::info!(username = %session.profile.username, "resumed cached session");
        Ok(Some(session))
    }

    /// Remove the persisted session (sign-out).
    pub fn clear(&self) -> DeskResult<()> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    fn fake_jwt(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.sig", header, body)
    }

    fn profile(name: &str, role: Role) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: name.into(),
            username: name.to_lowercase(),
            role,
        }
    }

    #[test]
    fn parses_exp_claim() {
        let token = fake_jwt(serde_json::json!({ "sub": "u1", "exp": 1735689600 }));
        assert_eq!(parse_jwt_exp(&token), Some(1735689600));
    }

    #[test]
    fn malformed_token_yields_no_expiry() {
        assert_eq!(parse_jwt_exp("not-a-jwt"), None);
        assert_eq!(parse_jwt_exp("a.b"), None);
        assert_eq!(parse_jwt_exp("a.!!!.c"), None);
    }

    #[test]
    fn expiry_check_uses_exp_claim() {
        let token = fake_jwt(serde_json::json!({ "exp": 1000 }));
        let session = AuthSession::new(token, profile("Ana", Role::Admin));
        assert!(!session.is_expired(999));
        assert!(session.is_expired(1001));
    }

    #[test]
    fn session_without_exp_never_expires() {
        let token = fake_jwt(serde_json::json!({ "sub": "u1" }));
        let session = AuthSession::new(token, profile("Ana", Role::User));
        assert!(!session.is_expired(u64::MAX));
    }

    #[test]
    fn store_round_trips_active_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let far_future = unix_now() + 3600;
        let token = fake_jwt(serde_json::json!({ "exp": far_future }));
        let session = AuthSession::new(token, profile("Ana", Role::Admin));

        store.save(&session).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, session.token);
        assert_eq!(loaded.profile.username, "ana");
        assert_eq!(loaded.expires_at, Some(far_future));
    }

    #[test]
    fn expired_session_is_cleared_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let token = fake_jwt(serde_json::json!({ "exp": 1000 }));
        let session = AuthSession::new(token, profile("Ana", Role::User));
        store.save(&session).unwrap();

        assert!(store.load().unwrap().is_none());
        // The file is gone as well, not just ignored.
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load().unwrap().is_none());

        let token = fake_jwt(serde_json::json!({ "exp": unix_now() + 3600 }));
        store
            .save(&AuthSession::new(token, profile("Ana", Role::Admin)))
            .unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
