use ud_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD HH:MM:SS`, UTC
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        let created_at = u.created_at_display();
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at,
        }
    }
}
