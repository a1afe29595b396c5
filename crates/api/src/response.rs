//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement returned by update, delete and
/// logging endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Body of the `/api/` service banner.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub version: &'static str,
}
