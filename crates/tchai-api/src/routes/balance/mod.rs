//! Balance routes

pub mod api;

pub use api::api_balance;
