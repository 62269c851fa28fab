use crate::{ConfigError, ConfigErrorResult};

use ud_core::FieldLimits;
use ud_core::validation::limits::{DEFAULT_MAX_EMAIL_LENGTH, DEFAULT_MAX_NAME_LENGTH};

use serde::Deserialize;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 1000;

// Shortest address the email pattern accepts is "a@b.co"
pub const MIN_EMAIL_LENGTH: usize = 6;
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Field length limits applied to create/update payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_name_length: usize,
    pub max_email_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        ConfigError::check_range(
            "validation.max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        ConfigError::check_range(
            "validation.max_email_length",
            self.max_email_length,
            MIN_EMAIL_LENGTH,
            MAX_EMAIL_LENGTH,
        )
    }

    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            max_name_length: self.max_name_length,
            max_email_length: self.max_email_length,
        }
    }
}
