use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShoppingError {
    #[error(transparent)]
    Common(#[from] shopping_list_common::Error),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Item não encontrado: {0}")]
    ItemNotFound(String),

    #[error("Prefixo ambíguo '{prefix}': {count} itens correspondem")]
    AmbiguousId { prefix: String, count: usize },

    #[error("Período inválido: {0}")]
    InvalidPeriod(String),

    #[error("Erro de entrada: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShoppingError>;
