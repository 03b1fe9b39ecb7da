//! # Checkers Engine - Board, Rules and Search for 8x8 Draughts
//!
//! A self-contained engine for English draughts on the standard 8x8 board:
//! board representation with incremental Zobrist hashing, full move
//! generation including multi-jump chains, a hand-tuned static evaluation
//! and a transposition-backed alpha-beta search.
//!
//! ## Architecture
//!
//! - [`types`]: squares, colors, the 3-bit [`types::Tile`] encoding and
//!   the [`types::Move`] record that carries enough to undo itself.
//! - [`board`]: [`board::Position`], the mutable game state with
//!   make/undo, material counters and the incrementally maintained hash.
//! - [`move_gen`]: legal move enumeration. Jump chains are walked
//!   recursively and every chain prefix is offered as its own move;
//!   `forced_jumping` turns the turn-wide capture obligation on.
//! - [`evaluation`]: the seven-feature static score, positive for black.
//! - [`hash`]: Zobrist keys and the fixed-size transposition table.
//! - [`search`]: [`search::Engine`], recursive alpha-beta with black as
//!   the maximizing side and an optional wall-clock budget.
//! - [`api`]: validated wrappers for untrusted callers, with
//!   [`error::EngineError`] at the boundary.
//!
//! ## Score convention
//!
//! One scale everywhere: positive favors black, negative favors white,
//! `f64::INFINITY` and `f64::NEG_INFINITY` mark decided games. The search
//! maximizes for black and minimizes for white on that same scale.
//!
//! ## Caching caveat
//!
//! Transposition probes ignore the depth an entry was computed at and cut
//! off on any key match that carries a best move (entries without one are
//! leaf scores and only answer at leaf depth). Shallow cached scores can
//! stand in where a deeper search was requested; the speedup is taken
//! deliberately at the cost of that precision. This is also why the search
//! runs at a single fixed depth rather than iteratively deepening: with a
//! depth-agnostic cutoff, a deeper re-search would be answered from the
//! cache at the root.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod move_gen;
pub mod search;
pub mod types;

pub use board::{coords_of, square_at, Position};
pub use error::{EngineError, EngineResult};
pub use evaluation::evaluate;
pub use hash::{TranspositionTable, Zobrist};
pub use move_gen::{legal_moves, piece_moves};
pub use search::{Engine, SearchLimits};
pub use types::{Color, Move, Square, Tile};
