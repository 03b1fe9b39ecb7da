//! # Engine Constants - Board Geometry, Evaluation Weights & Search Parameters
//!
//! Centralizes every constant the engine uses: tile bit masks, board border
//! coordinates, the tuned evaluation weight vector, and the sizing of the
//! transposition table. Keeping these in one flat module makes the tuning
//! surface of the engine visible at a glance.
//!
//! ## Tile Bit Encoding
//!
//! A tile is a 3-bit value: bit 0 marks a white piece, bit 1 a black piece
//! (mutually exclusive; both clear means the square is empty) and bit 2 marks
//! a crowned piece (king). The king bit is only ever set together with a
//! color bit. This mirrors the classic compact encodings used by board-game
//! engines: color and rank checks compile to single mask instructions and a
//! whole board is 64 bytes.
//!
//! ## Evaluation Weights
//!
//! `EVAL_WEIGHTS` is applied to the per-feature difference `black - white`
//! (black is the engine's fixed maximizing side). The vector is tuned as a
//! whole; changing one entry shifts the engine's playing style, so the exact
//! values are part of the engine's behavioral contract and are pinned by
//! tests.

/// Board height in rows.
pub const ROWS: i8 = 8;
/// Board width in columns.
pub const COLS: i8 = 8;
/// Total number of squares; only the 32 dark ones are ever occupied.
pub const NUM_SQUARES: usize = (ROWS * COLS) as usize;

pub const TOP_BORDER: i8 = 0;
pub const BOTTOM_BORDER: i8 = ROWS - 1;
pub const LEFT_BORDER: i8 = 0;
pub const RIGHT_BORDER: i8 = COLS - 1;

/// Tile bit: square holds a white piece.
pub const WHITE_BIT: u8 = 0b001;
/// Tile bit: square holds a black piece.
pub const BLACK_BIT: u8 = 0b010;
/// Tile bit: the piece is a king.
pub const KING_BIT: u8 = 0b100;

/// Number of features per side in the static evaluation.
pub const EVAL_FEATURES: usize = 7;

/// Tuned evaluation weights, indexed by feature:
/// 0 plain pieces, 1 kings, 2 back-row pieces, 3 center-box pieces,
/// 4 mid-row pieces outside the box, 5 pieces capturable next turn,
/// 6 protected pieces.
pub const EVAL_WEIGHTS: [f64; EVAL_FEATURES] = [5.0, 7.5, 4.0, 2.5, 0.5, -3.0, 3.0];

/// Default search depth in plies when the caller gives no explicit budget.
pub const DEFAULT_DEPTH: u8 = 6;

/// Number of transposition table slots (power of two, so indexing is a mask).
pub const TT_SIZE: usize = 1 << 20;

/// Seed for the Zobrist key table. Fixed so that independently constructed
/// positions hash identically and games are reproducible.
pub const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Number of distinct piece kinds for Zobrist keying:
/// white man, black man, white king, black king.
pub const PIECE_KINDS: usize = 4;
