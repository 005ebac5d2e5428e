//! Error types

use thiserror::Error;

/// Rejected user input. The operation that produced it left the state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("O nome do item não pode estar vazio.")]
    EmptyName,

    #[error("A quantidade deve ser um número positivo.")]
    InvalidQuantity,

    #[error("O valor deve ser um número válido.")]
    InvalidPrice,

    #[error("Não há itens para arquivar neste mês.")]
    EmptyMonth,
}

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Stored data is corrupt ({key}): {reason}")]
    StorageCorrupt { key: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Nenhum mês arquivado para exportar.")]
    EmptyHistory,
}

impl Error {
    pub fn corrupt(key: &str, reason: impl Into<String>) -> Self {
        Error::StorageCorrupt {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// True for rejected input, as opposed to storage or encoding failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
