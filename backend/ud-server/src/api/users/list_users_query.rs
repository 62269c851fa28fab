use ud_db::UserSort;

use serde::Deserialize;

/// Query parameters for listing users
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// "name" (default) or "email"; anything else sorts by name
    pub sort_by: Option<String>,
    /// "asc" (default) or "desc"
    pub sort_order: Option<String>,
}

impl ListUsersQuery {
    pub fn sort(&self) -> UserSort {
        UserSort::from_params(self.sort_by.as_deref(), self.sort_order.as_deref())
    }
}
