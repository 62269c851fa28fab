pub mod email;
pub mod limits;
