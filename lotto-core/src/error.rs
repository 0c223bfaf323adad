use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid ticket length: expected {expected} numbers, got {got}")]
    InvalidTicketLength { expected: usize, got: usize },

    #[error("Number {number} out of range [{min}, {max}]")]
    NumberOutOfRange { number: u32, min: u32, max: u32 },

    #[error("Too many tickets: {requested} requested, at most {max} per purchase")]
    TooManyTickets { requested: u64, max: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LottoError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
