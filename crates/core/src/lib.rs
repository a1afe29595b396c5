//! Store-independent vocabulary shared by the db and api crates.

pub mod analytics;
pub mod error;
pub mod leads;
pub mod types;
