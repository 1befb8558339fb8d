pub mod error;
pub mod order;
pub mod response;
pub mod user;
