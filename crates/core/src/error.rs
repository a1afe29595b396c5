use crate::types::DocId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: DocId },

    /// The store did not acknowledge an insert (constraint violation, rejected value).
    #[error("Failed to create {entity}")]
    WriteFailed { entity: &'static str },

    /// The store did not acknowledge an update, replace or soft delete.
    #[error("Failed to update {entity}")]
    UpdateFailed { entity: &'static str },
}

impl CoreError {
    /// Human-readable message sent back to API clients.
    ///
    /// Entity names are lowercased for the write failure messages so the
    /// client sees e.g. `Failed to create blog post`.
    pub fn client_message(&self) -> String {
        match self {
            CoreError::NotFound { entity, .. } => format!("{entity} not found"),
            CoreError::WriteFailed { entity } => {
                format!("Failed to create {}", entity.to_lowercase())
            }
            CoreError::UpdateFailed { entity } => {
                format!("Failed to update {}", entity.to_lowercase())
            }
        }
    }
}
