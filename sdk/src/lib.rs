pub mod client;
pub mod error;
pub mod http;
pub mod identifier;
pub mod models;
pub mod topics;
pub mod validatable;
