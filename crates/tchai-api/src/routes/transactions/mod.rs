//! Transaction routes - record, list, list per person
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::{
    api_transaction_store,
    api_transactions,
    api_transactions_for_person,
};
