use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex should compile")
});

/// Basic `local@domain.tld` syntax check.
///
/// Local part: letters, digits and `._%+-`. Domain: letters, digits, `.` and
/// `-`, ending in a TLD of at least two letters. No store access.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
