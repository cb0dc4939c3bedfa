//! Local preferences
//!
//! Small write-through JSON store under the work dir. The only
//! preference today is the last-selected bet-type filter per session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DeskResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    /// session id -> last-selected bet-type filter
    #[serde(default)]
    bet_type_filters: HashMap<String, String>,
}

/// File-backed preference store
pub struct PrefsStore {
    file_path: PathBuf,
    data: PrefsFile,
}

impl PrefsStore {
    /// Load preferences, starting empty when the file is missing.
    pub fn load(work_dir: &Path) -> DeskResult<Self> {
        let file_path = work_dir.join("prefs.json");
        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            PrefsFile::default()
        };
        Ok(Self { file_path, data })
    }

    fn save(&self) -> DeskResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Last-selected bet-type filter for a session.
    pub fn bet_type_filter(&self, session_id: &str) -> Option<&str> {
        self.data
            .bet_type_filters
            .get(session_id)
            .map(String::as_str)
    }

    /// Remember the bet-type filter for a session; `None` clears it.
    pub fn set_bet_type_filter(
        &mut self,
        session_id: &str,
        filter: Option<&str>,
    ) -> DeskResult<()> {
        match filter {
            Some(value) => {
                self.data
                    .bet_type_filters
                    .insert(session_id.to_string(), value.to_string());
            }
            None => {
                self.data.bet_type_filters.remove(session_id);
            }
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefsStore::load(dir.path()).unwrap();
        assert!(prefs.bet_type_filter("sess1").is_none());
    }

    #[test]
    fn filter_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut prefs = PrefsStore::load(dir.path()).unwrap();
        prefs.set_bet_type_filter("sess1", Some("friendly")).unwrap();
        prefs.set_bet_type_filter("sess2", Some("doubles")).unwrap();

        let reloaded = PrefsStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.bet_type_filter("sess1"), Some("friendly"));
        assert_eq!(reloaded.bet_type_filter("sess2"), Some("doubles"));
        assert!(reloaded.bet_type_filter("sess3").is_none());
    }

    #[test]
    fn clearing_removes_the_entry() {
        let dir = tempfile::tempdir().unwrap();

        let mut prefs = PrefsStore::load(dir.path()).unwrap();
        prefs.set_bet_type_filter("sess1", Some("friendly")).unwrap();
        prefs.set_bet_type_filter("sess1", None).unwrap();

        let reloaded = PrefsStore::load(dir.path()).unwrap();
        assert!(reloaded.bet_type_filter("sess1").is_none());
    }
}
