use chrono::{DateTime, Utc};
use shared::models::{Session, SessionInput};
use validator::{Validate, ValidationError};

/// Session create/edit form state
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = validate_session_draft))]
pub struct SessionDraft {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "at least one court is required"))]
    pub courts: Vec<String>,
    #[validate(length(min = 1, message = "a default shuttle is required"))]
    pub shuttle: String,
    pub players: Vec<String>,
}

fn validate_session_draft(draft: &SessionDraft) -> Result<(), ValidationError> {
    if let Some(end) = draft.end {
        if end <= draft.start {
            return Err(ValidationError::new("end_before_start"));
        }
    }
    Ok(())
}

impl SessionDraft {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: None,
            courts: Vec::new(),
            shuttle: String::new(),
            players: Vec::new(),
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            start: session.start,
            end: session.end,
            courts: session.courts.iter().map(|c| c.id.clone()).collect(),
            shuttle: session
                .shuttle
                .as_ref()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            players: session
                .available_players
                .iter()
                .map(|p| p.id.clone())
                .collect(),
        }
    }

    pub fn to_input(&self) -> SessionInput {
        SessionInput {
            start: self.start,
            end: self.end,
            courts: self.courts.clone(),
            shuttle: self.shuttle.clone(),
            available_players: self.players.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap()
    }

    fn valid() -> SessionDraft {
        SessionDraft {
            courts: vec!["c1".into()],
            shuttle: "s1".into(),
            ..SessionDraft::new(start())
        }
    }

    #[test]
    fn requires_a_court_and_a_shuttle() {
        let draft = SessionDraft::new(start());
        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("courts"));
        assert!(errs.field_errors().contains_key("shuttle"));
    }

    #[test]
    fn end_must_follow_start() {
        let mut draft = valid();
        draft.end = Some(start());
        assert!(draft.validate().is_err());

        draft.end = Some(start() + chrono::Duration::hours(4));
        draft.validate().unwrap();
    }

    #[test]
    fn open_session_is_valid_without_end() {
        valid().validate().unwrap();
    }
}
