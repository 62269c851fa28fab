use ud_core::NewUser;

/// Builds an already-validated user payload
pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}
