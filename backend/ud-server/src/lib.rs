pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod index;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        list_users_query::ListUsersQuery,
        search_users_query::SearchUsersQuery,
        user_dto::UserDto,
        users::{create_user, delete_user, list_users, search_users, update_user},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
