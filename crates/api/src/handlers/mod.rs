//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `consorcio_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod analytics;
pub mod blog;
pub mod cars;
pub mod leads;
pub mod status;
pub mod testimonials;
