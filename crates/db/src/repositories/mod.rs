//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor for inserts, so the
//! seed can run them inside a transaction) as the first argument.

pub mod analytics_repo;
pub mod blog_post_repo;
pub mod car_repo;
pub mod lead_repo;
pub mod status_check_repo;
pub mod testimonial_repo;

pub use analytics_repo::AnalyticsRepo;
pub use blog_post_repo::BlogPostRepo;
pub use car_repo::CarRepo;
pub use lead_repo::LeadRepo;
pub use status_check_repo::StatusCheckRepo;
pub use testimonial_repo::TestimonialRepo;
