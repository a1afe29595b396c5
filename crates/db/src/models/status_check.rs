//! Legacy status-check pings.

use consorcio_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `status_checks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCheck {
    pub id: DocId,
    pub client_name: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatusCheck {
    pub client_name: String,
}
