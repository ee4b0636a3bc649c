//! Route modules for the API server
//!
//! - transactions: record and list transactions
//! - balance: net balance per person
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints

pub mod balance;
pub mod transactions;
