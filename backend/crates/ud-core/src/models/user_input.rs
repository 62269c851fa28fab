//! Request payload for create/update and its validated form.

use crate::{CoreError, FieldLimits, Result as CoreResult, is_valid_email};

use serde::Deserialize;

pub const FIELDS_REQUIRED_MESSAGE: &str = "Name and email are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";

/// Raw `{name, email}` body. Missing fields deserialize as empty strings so
/// they surface as the "required" validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

/// Trimmed and validated name/email pair, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Trim both fields and check presence, email syntax and length limits.
    ///
    /// Uniqueness is not checked here; it needs the store.
    pub fn validate(&self, limits: &FieldLimits) -> CoreResult<NewUser> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return Err(CoreError::validation(FIELDS_REQUIRED_MESSAGE, None));
        }

        if !is_valid_email(email) {
            return Err(CoreError::validation(INVALID_EMAIL_MESSAGE, Some("email")));
        }

        if name.chars().count() > limits.max_name_length {
            return Err(CoreError::validation(
                format!(
                    "Name must be at most {} characters",
                    limits.max_name_length
                ),
                Some("name"),
            ));
        }

        if email.chars().count() > limits.max_email_length {
            return Err(CoreError::validation(
                format!(
                    "Email must be at most {} characters",
                    limits.max_email_length
                ),
                Some("email"),
            ));
        }

        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}
