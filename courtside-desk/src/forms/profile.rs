use std::sync::LazyLock;

use regex::Regex;
use shared::models::{Role, User, UserInput};
use validator::Validate;

static PIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex literal"));

/// Player profile create/edit form state
///
/// The PIN is only present when being (re)set; editing a profile
/// without touching the PIN leaves it `None`.
#[derive(Debug, Clone, Validate)]
pub struct ProfileDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    pub contact: Option<String>,
    pub role: Role,
    #[validate(regex(path = *PIN_REGEX, message = "PIN must be exactly 4 digits"))]
    pub pin: Option<String>,
    /// Id of the sponsoring user, when any
    pub sponsored_by: Option<String>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            contact: None,
            role: Role::User,
            pin: None,
            sponsored_by: None,
        }
    }
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            contact: user.contact.clone(),
            role: user.role,
            pin: None,
            sponsored_by: user.sponsored_by.as_ref().map(|s| s.id.clone()),
        }
    }

    pub fn to_input(&self) -> UserInput {
        UserInput {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            contact: self.contact.clone(),
            role: self.role,
            pin: self.pin.clone(),
            sponsored_by: self.sponsored_by.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ana".into(),
            username: "ana".into(),
            ..Default::default()
        }
    }

    #[test]
    fn pin_must_be_four_digits() {
        for bad in ["123", "12345", "abcd", "12a4"] {
            let mut d = draft();
            d.pin = Some(bad.into());
            assert!(d.validate().is_err(), "accepted {bad:?}");
        }

        let mut ok = draft();
        ok.pin = Some("0042".into());
        ok.validate().unwrap();
    }

    #[test]
    fn pin_is_optional_when_not_being_set() {
        draft().validate().unwrap();
    }

    #[test]
    fn name_and_username_are_required() {
        let mut d = draft();
        d.username = String::new();
        let errs = d.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("username"));
    }
}
