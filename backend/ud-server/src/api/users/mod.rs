pub mod list_users_query;
pub mod search_users_query;
pub mod user_dto;
pub mod users;
