//! Analytics dashboard constants.

/// Number of vehicle models reported in the dashboard's popularity ranking.
pub const POPULAR_MODELS_LIMIT: i64 = 5;
