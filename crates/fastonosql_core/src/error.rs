use crate::ValueType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Type not allowed: {0}")]
    TypeNotAllowed(ValueType),

    #[error("Key name is empty")]
    EmptyKeyName,

    #[error("Value is empty")]
    EmptyValue,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CoreError {
    pub fn contract_violation(message: impl Into<String>) -> Self {
        Self::ContractViolation(message.into())
    }

    /// Whether the error means "no value to commit" rather than a programmer error.
    ///
    /// Dialogs stay open on these instead of confirming.
    pub fn is_refused_conversion(&self) -> bool {
        matches!(
            self,
            Self::EmptyKeyName
                | Self::EmptyValue
                | Self::InvalidJson(_)
                | Self::InvalidNumber(_)
                | Self::InvalidScore(_)
        )
    }
}
