use crate::types::Turn;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Non-finite {quantity} computed at turn {turn}")]
    NonFinite { turn: Turn, quantity: &'static str },

    #[error("Horizon exhausted: all {turns} turns already computed")]
    HorizonExhausted { turns: usize },
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}

pub type SimResult<T> = Result<T, SimError>;
