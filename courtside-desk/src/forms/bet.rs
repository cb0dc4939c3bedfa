use rust_decimal::Decimal;
use shared::models::{Bet, BetInput, BettorPairInput};
use validator::{Validate, ValidationError};

/// One bettor pair on the bet form; either side may be empty, but not
/// both.
#[derive(Debug, Clone, Default)]
pub struct BettorPairDraft {
    pub for_a: Option<String>,
    pub for_b: Option<String>,
}

/// Bet create/edit form state
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = validate_bet_draft))]
pub struct BetDraft {
    #[validate(length(min = 1, message = "game is required"))]
    pub game: String,
    #[validate(length(min = 1, message = "bet type is required"))]
    pub bet_type: String,
    pub amount: Decimal,
    pub pairs: Vec<BettorPairDraft>,
    pub paid: bool,
}

fn validate_bet_draft(draft: &BetDraft) -> Result<(), ValidationError> {
    if draft.amount.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    if draft.pairs.is_empty() {
        return Err(ValidationError::new("no_bettors"));
    }
    if draft
        .pairs
        .iter()
        .any(|p| p.for_a.is_none() && p.for_b.is_none())
    {
        return Err(ValidationError::new("empty_pair"));
    }
    Ok(())
}

impl BetDraft {
    pub fn new(game: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            bet_type: String::new(),
            amount: Decimal::ZERO,
            pairs: Vec::new(),
            paid: false,
        }
    }

    pub fn from_bet(bet: &Bet) -> Self {
        Self {
            game: bet.game.id.clone(),
            bet_type: bet.bet_type.clone(),
            amount: bet.bet_amount,
            pairs: bet
                .bettors
                .iter()
                .map(|p| BettorPairDraft {
                    for_a: p.bettor_for_a.as_ref().map(|u| u.id.clone()),
                    for_b: p.bettor_for_b.as_ref().map(|u| u.id.clone()),
                })
                .collect(),
            paid: bet.paid,
        }
    }

    pub fn to_input(&self) -> BetInput {
        BetInput {
            bettors: self
                .pairs
                .iter()
                .map(|p| BettorPairInput {
                    bettor_for_a: p.for_a.clone(),
                    bettor_for_b: p.for_b.clone(),
                })
                .collect(),
            game: self.game.clone(),
            bet_type: self.bet_type.trim().to_string(),
            bet_amount: self.amount,
            paid: Some(self.paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> BetDraft {
        BetDraft {
            bet_type: "friendly".into(),
            amount: Decimal::new(50, 0),
            pairs: vec![BettorPairDraft {
                for_a: Some("p1".into()),
                for_b: Some("p2".into()),
            }],
            ..BetDraft::new("g1")
        }
    }

    #[test]
    fn valid_draft_passes() {
        valid().validate().unwrap();
    }

    #[test]
    fn requires_type_amount_and_a_pair() {
        let mut draft = valid();
        draft.bet_type = String::new();
        assert!(draft.validate().is_err());

        let mut draft = valid();
        draft.amount = Decimal::new(-1, 0);
        assert!(draft.validate().is_err());

        let mut draft = valid();
        draft.pairs.clear();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn one_sided_pair_is_allowed_but_empty_pair_is_not() {
        let mut draft = valid();
        draft.pairs[0].for_b = None;
        draft.validate().unwrap();

        draft.pairs[0].for_a = None;
        assert!(draft.validate().is_err());
    }
}
