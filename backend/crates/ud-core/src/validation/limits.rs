pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 120;

/// Upper bounds on field lengths, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_name_length: usize,
    pub max_email_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
        }
    }
}
