use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u32,
        available: u32,
    },

    #[error("Id space exhausted: no id after {0}")]
    IdsExhausted(u64),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StockError {
    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        StockError::InvalidInput(format!("{}: {}", field, reason))
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
