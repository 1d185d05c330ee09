use thiserror::Error;

use crate::Number;

/// A pick set (or draw) that violates the shape of the lottery.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    #[error("player ids start at 1")]
    ZeroPlayerId,

    #[error("invalid quantity of picked numbers: expected {expected}, found {found}")]
    InvalidQuantityOfNumbers { expected: usize, found: usize },

    #[error("picked number {number} is out of range 1..={max}")]
    NumberOutOfRange { number: i64, max: Number },

    #[error("number {0} was picked more than once")]
    RepeatedNumber(Number),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("the engine must be prepared before processing draws")]
    NotReady,

    #[error("the previous draw has not been reset")]
    PendingReset,

    #[error("invalid draw: {0}")]
    InvalidDraw(#[from] PickError),
}
