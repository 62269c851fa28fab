#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::new_user;
pub use test_db::{create_test_pool, insert_users};
