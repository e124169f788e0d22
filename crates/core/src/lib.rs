//! Domain types, errors, and validation rules shared by the db and api crates.

pub mod error;
pub mod issue;
pub mod types;
