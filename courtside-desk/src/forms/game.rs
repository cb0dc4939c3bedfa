use std::collections::HashSet;

use chrono::{DateTime, Utc};
use shared::models::{Game, GameInput, GameStatus, ShuttleUsageInput, Winner};
use validator::{Validate, ValidationError};

/// One shuttle row on the game form
#[derive(Debug, Clone)]
pub struct ShuttleQty {
    pub shuttle: String,
    pub quantity: u32,
}

/// Game create/edit form state
///
/// `roster` is the session's available-player ids; slots must be drawn
/// from it. Doubles requires both second slots or neither.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = validate_game_draft))]
pub struct GameDraft {
    pub session: String,
    pub start: DateTime<Utc>,
    /// Set when editing a game that has already ended
    pub end: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "side A needs a player"))]
    pub a1: String,
    pub a2: Option<String>,
    #[validate(length(min = 1, message = "side B needs a player"))]
    pub b1: String,
    pub b2: Option<String>,
    #[validate(length(min = 1, message = "court is required"))]
    pub court: String,
    pub shuttles: Vec<ShuttleQty>,
    pub winner: Option<Winner>,
    pub status: GameStatus,
    /// Session roster the slots must come from
    pub roster: Vec<String>,
}

fn validate_game_draft(draft: &GameDraft) -> Result<(), ValidationError> {
    // Doubles takes both second slots, singles neither.
    if draft.a2.is_some() != draft.b2.is_some() {
        return Err(ValidationError::new("slot_pairing"));
    }

    let mut slots: Vec<&str> = vec![&draft.a1, &draft.b1];
    slots.extend(draft.a2.as_deref());
    slots.extend(draft.b2.as_deref());

    let distinct: HashSet<&str> = slots.iter().copied().collect();
    if distinct.len() != slots.len() {
        return Err(ValidationError::new("duplicate_player"));
    }

    for slot in &slots {
        if !slot.is_empty() && !draft.roster.iter().any(|id| id == slot) {
            return Err(ValidationError::new("player_not_in_roster"));
        }
    }

    if draft.shuttles.iter().any(|s| s.quantity < 1) {
        return Err(ValidationError::new("shuttle_quantity"));
    }

    Ok(())
}

impl GameDraft {
    /// Fresh draft for a new game; creation starts the game as ongoing.
    pub fn new(session: impl Into<String>, start: DateTime<Utc>, roster: Vec<String>) -> Self {
        Self {
            session: session.into(),
            start,
            end: None,
            a1: String::new(),
            a2: None,
            b1: String::new(),
            b2: None,
            court: String::new(),
            shuttles: Vec::new(),
            winner: None,
            status: GameStatus::Ongoing,
            roster,
        }
    }

    pub fn from_game(session: impl Into<String>, game: &Game, roster: Vec<String>) -> Self {
        Self {
            session: session.into(),
            start: game.start,
            end: game.end,
            a1: game.a1.id.clone(),
            a2: game.a2.as_ref().map(|p| p.id.clone()),
            b1: game.b1.id.clone(),
            b2: game.b2.as_ref().map(|p| p.id.clone()),
            court: game.court.id.clone(),
            shuttles: game
                .shuttles_used
                .iter()
                .map(|u| ShuttleQty {
                    shuttle: u.shuttle.id.clone(),
                    quantity: u.quantity,
                })
                .collect(),
            winner: game.winner,
            status: game.status,
            roster,
        }
    }

    pub fn to_input(&self) -> GameInput {
        GameInput {
            session: self.session.clone(),
            start: self.start,
            end: self.end,
            a1: self.a1.clone(),
            a2: self.a2.clone(),
            b1: self.b1.clone(),
            b2: self.b2.clone(),
            court: self.court.clone(),
            shuttles_used: self
                .shuttles
                .iter()
                .map(|s| ShuttleUsageInput {
                    shuttle: s.shuttle.clone(),
                    quantity: s.quantity,
                })
                .collect(),
            winner: self.winner,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn roster() -> Vec<String> {
        ["p1", "p2", "p3", "p4", "p5"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn singles() -> GameDraft {
        let mut draft = GameDraft::new(
            "sess1",
            Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap(),
            roster(),
        );
        draft.a1 = "p1".into();
        draft.b1 = "p2".into();
        draft.court = "c1".into();
        draft
    }

    #[test]
    fn singles_draft_is_valid() {
        singles().validate().unwrap();
    }

    #[test]
    fn doubles_requires_both_second_slots() {
        let mut draft = singles();
        draft.a2 = Some("p3".into());
        assert!(draft.validate().is_err());

        draft.b2 = Some("p4".into());
        draft.validate().unwrap();
    }

    #[test]
    fn a_player_cannot_fill_two_slots() {
        let mut draft = singles();
        draft.a2 = Some("p1".into());
        draft.b2 = Some("p4".into());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn slots_must_come_from_the_roster() {
        let mut draft = singles();
        draft.b1 = "stranger".into();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn shuttle_quantity_must_be_at_least_one() {
        let mut draft = singles();
        draft.shuttles.push(ShuttleQty {
            shuttle: "s1".into(),
            quantity: 0,
        });
        assert!(draft.validate().is_err());

        draft.shuttles[0].quantity = 2;
        draft.validate().unwrap();
    }

    #[test]
    fn new_draft_starts_ongoing() {
        let draft = singles();
        assert_eq!(draft.status, GameStatus::Ongoing);
        assert_eq!(draft.to_input().status, GameStatus::Ongoing);
        assert_eq!(draft.to_input().end, None);
    }

    #[test]
    fn editing_a_finished_game_keeps_end_and_status() {
        use rust_decimal::Decimal;
        use shared::models::{Court, UserRef};

        let start = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let end = start + chrono::Duration::minutes(45);
        let user = |id: &str| UserRef {
            id: id.into(),
            name: id.to_uppercase(),
        };
        let game = Game {
            id: "g1".into(),
            start,
            end: Some(end),
            a1: user("p1"),
            a2: None,
            b1: user("p2"),
            b2: None,
            court: Court {
                id: "c1".into(),
                name: "Court 1".into(),
                price: Decimal::new(200, 0),
                active: true,
            },
            shuttles_used: vec![],
            winner: None,
            status: GameStatus::Completed,
            active: true,
        };

        let mut draft = GameDraft::from_game("sess1", &game, roster());
        draft.winner = Some(Winner::A);

        let input = draft.to_input();
        assert_eq!(input.end, Some(end));
        assert_eq!(input.status, GameStatus::Completed);
        assert_eq!(input.winner, Some(Winner::A));
    }
}
