use rust_decimal::Decimal;
use shared::models::{Court, CourtInput};
use validator::{Validate, ValidationError};

/// Court create/edit form state
#[derive(Debug, Clone, Default, Validate)]
pub struct CourtDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(custom(function = non_negative))]
    pub price: Decimal,
}

fn non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

impl CourtDraft {
    /// Prefill from an existing record for editing.
    pub fn from_court(court: &Court) -> Self {
        Self {
            name: court.name.clone(),
            price: court.price,
        }
    }

    pub fn to_input(&self) -> CourtInput {
        CourtInput {
            name: self.name.trim().to_string(),
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let draft = CourtDraft {
            name: String::new(),
            price: Decimal::new(200, 0),
        };
        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("name"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let draft = CourtDraft {
            name: "Court 1".into(),
            price: Decimal::new(-1, 0),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn valid_draft_produces_trimmed_input() {
        let draft = CourtDraft {
            name: " Court 1 ".into(),
            price: Decimal::new(200, 0),
        };
        draft.validate().unwrap();
        assert_eq!(draft.to_input().name, "Court 1");
    }
}
