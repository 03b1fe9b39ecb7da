//! Error types for the public engine API.
//!
//! Internal move generation and search never fail; errors only arise at the
//! boundary where untrusted moves arrive (UIs, network peers, saved games).

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors reported by the validated API in [`crate::api`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("square {square} is outside the board")]
    InvalidSquare { square: Square },

    #[error("square {square} is empty")]
    EmptySquare { square: Square },

    #[error("piece on square {square} does not belong to {color:?}")]
    WrongColor { square: Square, color: Color },

    #[error("move {src} -> {dst} is not legal for {color:?} in this position")]
    IllegalMove {
        src: Square,
        dst: Square,
        color: Color,
    },

    #[error("move {src} -> {dst} does not match the board state and cannot be undone")]
    UndoMismatch { src: Square, dst: Square },
}

/// Convenience alias used across the public API.
pub type EngineResult<T> = Result<T, EngineError>;
