pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;
pub mod sort;


pub use connection::pool::{begin_write, connect, ping};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use schema::initialize_schema;
pub use sort::{SortOrder, UserSort, UserSortField};
