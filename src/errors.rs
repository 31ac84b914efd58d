use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store fault: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("Seed aborted after {inserted} inserts: {reason}")]
    Seed { inserted: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Count of records the store accepted before this error, when known.
    #[must_use]
    pub fn inserted_count(&self) -> u64 {
        match self {
            Self::Seed { inserted, .. } => *inserted,
            _ => 0,
        }
    }
}
