//! Engine error types

use crate::hex::Hex;

/// Error types for rule engine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("hex {hex} is outside the playable region")]
    OutOfBounds { hex: Hex },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Hex, to: Hex },

    #[error("invalid board size {width}x{height}: both dimensions must be positive")]
    InvalidBoardSize { width: i32, height: i32 },

    #[error("invalid hex key {0:?}: expected \"q,r\"")]
    InvalidHexKey(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
