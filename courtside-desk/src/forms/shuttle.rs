use rust_decimal::Decimal;
use shared::models::{Shuttle, ShuttleInput};
use validator::{Validate, ValidationError};

/// Shuttle create/edit form state
#[derive(Debug, Clone, Default, Validate)]
pub struct ShuttleDraft {
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

impl ShuttleDraft {
    pub fn from_shuttle(shuttle: &Shuttle) -> Self {
        Self {
            name: shuttle.name.clone(),
            price: shuttle.price,
        }
    }

    pub fn to_input(&self) -> ShuttleInput {
        ShuttleInput {
            name: self.name.trim().to_string(),
            price: self.price,
        }
    }
}
