pub mod error;
pub mod models;
pub mod validation;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::user::User;
pub use models::user_input::{NewUser, UserInput};
pub use validation::email::is_valid_email;
pub use validation::limits::FieldLimits;

/// Format used for `created_at` in every outward representation of a user.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
