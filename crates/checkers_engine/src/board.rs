//! # Board State - Position, Make/Undo and Terminal Detection
//!
//! [`Position`] is the central mutable state of the engine: 64 tiles in a
//! row-major array plus piece and king counters per side, and an
//! incrementally maintained Zobrist hash. All mutation goes through
//! [`Position::make_move`] / [`Position::undo_move`] (or [`Position::set`]
//! for position construction); the counters and the hash are updated in
//! lockstep with the tiles, never recomputed from scratch on the hot path.
//!
//! `undo_move` is the exact inverse of `make_move`: after the pair, the tile
//! array, all four counters and the hash are bit-identical to before. The
//! search relies on this to mutate one Position in place down a whole tree.
//! Neither function allocates.
//!
//! Only squares with odd `(row + col)` are playable; the light squares stay
//! permanently empty and no move ever addresses them.

use std::fmt;

use crate::constants::*;
use crate::hash::Zobrist;
use crate::types::{Color, Move, Square, Tile};

/// Row and column of a linear square index.
#[inline]
pub fn coords_of(square: Square) -> (i8, i8) {
    (square / COLS, square % COLS)
}

/// Linear square index of a (row, col) pair.
#[inline]
pub fn square_at(row: i8, col: i8) -> Square {
    row * COLS + col
}

/// True if the coordinates lie on the board.
#[inline]
pub fn on_board(row: i8, col: i8) -> bool {
    (TOP_BORDER..=BOTTOM_BORDER).contains(&row) && (LEFT_BORDER..=RIGHT_BORDER).contains(&col)
}

/// True if the square is one of the 32 playable dark squares.
#[inline]
pub fn is_dark_square(row: i8, col: i8) -> bool {
    (row + col) % 2 == 1
}

/// Complete board state: tiles, per-side counters, incremental hash.
#[derive(Debug, Clone)]
pub struct Position {
    tiles: [Tile; NUM_SQUARES],
    white_left: u8,
    black_left: u8,
    white_kings: u8,
    black_kings: u8,
    hash: u64,
    zobrist: Zobrist,
}

impl Position {
    /// An empty board. Starting point for hand-built positions.
    pub fn empty() -> Self {
        Position {
            tiles: [Tile::EMPTY; NUM_SQUARES],
            white_left: 0,
            black_left: 0,
            white_kings: 0,
            black_kings: 0,
            hash: 0,
            zobrist: Zobrist::default(),
        }
    }

    /// The standard starting layout: black men on the dark squares of rows
    /// 0-2, white men on the dark squares of rows 5-7, rows 3-4 empty.
    pub fn new() -> Self {
        let mut position = Position::empty();
        for square in 0..NUM_SQUARES as Square {
            let (row, col) = coords_of(square);
            if !is_dark_square(row, col) {
                continue;
            }
            if row <= 2 {
                position.set(square, Tile::BLACK_MAN);
            } else if row >= 5 {
                position.set(square, Tile::WHITE_MAN);
            }
        }
        position
    }

    /// Tile on `square`.
    #[inline]
    pub fn tile(&self, square: Square) -> Tile {
        self.tiles[square as usize]
    }

    /// Place `tile` on `square`, replacing whatever stood there. Counters
    /// and hash follow. Intended for setup and tests, not for play.
    pub fn set(&mut self, square: Square, tile: Tile) {
        let old = self.tiles[square as usize];
        self.remove_from_counters(old);
        self.hash ^= self.zobrist.key(old, square);
        self.tiles[square as usize] = tile;
        self.add_to_counters(tile);
        self.hash ^= self.zobrist.key(tile, square);
    }

    /// Pieces remaining for `color`.
    #[inline]
    pub fn pieces_left(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_left,
            Color::Black => self.black_left,
        }
    }

    /// Kings remaining for `color`.
    #[inline]
    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_kings,
            Color::Black => self.black_kings,
        }
    }

    /// Incrementally maintained Zobrist hash of the occupancy.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// The key table this position hashes with.
    #[inline]
    pub fn zobrist(&self) -> &Zobrist {
        &self.zobrist
    }

    /// Hash recomputed from scratch. Test oracle for the incremental hash.
    pub fn recompute_hash(&self) -> u64 {
        self.zobrist.full_hash(&self.tiles)
    }

    /// True once either side has no pieces left.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.white_left == 0 || self.black_left == 0
    }

    /// The side that still has pieces when the other has none.
    pub fn winner(&self) -> Option<Color> {
        if self.white_left == 0 {
            Some(Color::Black)
        } else if self.black_left == 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Apply `mv` to the board.
    ///
    /// The move must be legal in the current position (as produced by the
    /// move generator); this is the unchecked hot path used by the search.
    /// Promotion applies at the final destination of the whole move, on the
    /// mover's own promotion row, even when the chain touched the back rank
    /// earlier.
    pub fn make_move(&mut self, mv: &Move) {
        let mover = self.tiles[mv.src() as usize];
        debug_assert!(!mover.is_empty(), "make_move from an empty square");
        debug_assert!(
            self.tiles[mv.dst() as usize].is_empty(),
            "make_move onto an occupied square"
        );

        let landed = if mv.promotes() { mover.promoted() } else { mover };

        self.hash ^= self.zobrist.key(mover, mv.src());
        self.tiles[mv.src() as usize] = Tile::EMPTY;
        self.tiles[mv.dst() as usize] = landed;
        self.hash ^= self.zobrist.key(landed, mv.dst());

        if mv.promotes() {
            match mover.color() {
                Some(Color::White) => self.white_kings += 1,
                Some(Color::Black) => self.black_kings += 1,
                None => {}
            }
        }

        for &(square, captured) in mv.captures() {
            debug_assert_eq!(
                self.tiles[square as usize], captured,
                "capture entry does not match the board"
            );
            self.hash ^= self.zobrist.key(captured, square);
            self.tiles[square as usize] = Tile::EMPTY;
            self.remove_from_counters(captured);
        }
    }

    /// Undo `mv`, restoring the exact state before the matching
    /// [`Position::make_move`]: tiles, counters and hash included.
    pub fn undo_move(&mut self, mv: &Move) {
        let landed = self.tiles[mv.dst() as usize];
        debug_assert!(!landed.is_empty(), "undo_move from an empty destination");
        debug_assert!(
            self.tiles[mv.src() as usize].is_empty(),
            "undo_move onto an occupied source"
        );

        let mover = if mv.promotes() {
            match landed.color() {
                Some(Color::White) => self.white_kings -= 1,
                Some(Color::Black) => self.black_kings -= 1,
                None => {}
            }
            landed.demoted()
        } else {
            landed
        };

        self.hash ^= self.zobrist.key(landed, mv.dst());
        self.tiles[mv.dst() as usize] = Tile::EMPTY;
        self.tiles[mv.src() as usize] = mover;
        self.hash ^= self.zobrist.key(mover, mv.src());

        for &(square, captured) in mv.captures() {
            self.tiles[square as usize] = captured;
            self.hash ^= self.zobrist.key(captured, square);
            self.add_to_counters(captured);
        }
    }

    #[inline]
    fn add_to_counters(&mut self, tile: Tile) {
        match tile.color() {
            Some(Color::White) => {
                self.white_left += 1;
                if tile.is_king() {
                    self.white_kings += 1;
                }
            }
            Some(Color::Black) => {
                self.black_left += 1;
                if tile.is_king() {
                    self.black_kings += 1;
                }
            }
            None => {}
        }
    }

    #[inline]
    fn remove_from_counters(&mut self, tile: Tile) {
        match tile.color() {
            Some(Color::White) => {
                self.white_left -= 1;
                if tile.is_king() {
                    self.white_kings -= 1;
                }
            }
            Some(Color::Black) => {
                self.black_left -= 1;
                if tile.is_king() {
                    self.black_kings -= 1;
                }
            }
            None => {}
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                write!(f, " {} ", self.tile(square_at(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let position = Position::new();
        assert_eq!(position.pieces_left(Color::White), 12);
        assert_eq!(position.pieces_left(Color::Black), 12);
        assert_eq!(position.kings(Color::White), 0);
        assert_eq!(position.kings(Color::Black), 0);

        for square in 0..NUM_SQUARES as Square {
            let (row, col) = coords_of(square);
            let tile = position.tile(square);
            if !is_dark_square(row, col) {
                assert!(tile.is_empty(), "light square {square} must be empty");
            } else if row <= 2 {
                assert_eq!(tile, Tile::BLACK_MAN);
            } else if row >= 5 {
                assert_eq!(tile, Tile::WHITE_MAN);
            } else {
                assert!(tile.is_empty(), "middle rows start empty");
            }
        }
    }

    #[test]
    fn test_step_round_trip() {
        let mut position = Position::new();
        let before = position.clone();

        // White man from (5,0) to (4,1).
        let mv = Move::step(square_at(5, 0), square_at(4, 1), false);
        position.make_move(&mv);
        assert!(position.tile(square_at(5, 0)).is_empty());
        assert_eq!(position.tile(square_at(4, 1)), Tile::WHITE_MAN);
        assert_ne!(position.hash(), before.hash());

        position.undo_move(&mv);
        assert_eq!(position.tiles, before.tiles);
        assert_eq!(position.hash(), before.hash());
        assert_eq!(position.pieces_left(Color::White), 12);
        assert_eq!(position.pieces_left(Color::Black), 12);
    }

    #[test]
    fn test_capture_round_trip_restores_king() {
        let mut position = Position::empty();
        position.set(square_at(2, 3), Tile::BLACK_MAN);
        position.set(square_at(3, 4), Tile::WHITE_KING);
        position.set(square_at(5, 2), Tile::WHITE_MAN);
        let before = position.clone();

        let mv = Move::jump(
            square_at(2, 3),
            square_at(4, 5),
            vec![(square_at(3, 4), Tile::WHITE_KING)],
            false,
        );
        position.make_move(&mv);
        assert_eq!(position.pieces_left(Color::White), 1);
        assert_eq!(position.kings(Color::White), 0);
        assert!(position.tile(square_at(3, 4)).is_empty());
        assert_eq!(position.tile(square_at(4, 5)), Tile::BLACK_MAN);

        position.undo_move(&mv);
        assert_eq!(position.tiles, before.tiles);
        assert_eq!(position.pieces_left(Color::White), 2);
        assert_eq!(position.kings(Color::White), 1, "captured king must return as a king");
        assert_eq!(position.hash(), before.hash());
    }

    #[test]
    fn test_promotion_and_undo() {
        let mut position = Position::empty();
        position.set(square_at(1, 2), Tile::WHITE_MAN);
        position.set(square_at(6, 5), Tile::BLACK_MAN);
        let before = position.clone();

        let mv = Move::step(square_at(1, 2), square_at(0, 1), true);
        position.make_move(&mv);
        assert_eq!(position.tile(square_at(0, 1)), Tile::WHITE_KING);
        assert_eq!(position.kings(Color::White), 1);

        position.undo_move(&mv);
        assert_eq!(position.tile(square_at(1, 2)), Tile::WHITE_MAN);
        assert_eq!(position.kings(Color::White), 0);
        assert_eq!(position.tiles, before.tiles);
        assert_eq!(position.hash(), before.hash());
    }

    #[test]
    fn test_king_visiting_back_rank_is_not_repromoted() {
        let mut position = Position::empty();
        position.set(square_at(1, 2), Tile::WHITE_KING);
        position.set(square_at(7, 0), Tile::BLACK_MAN);

        // A king stepping onto row 0 does not promote again.
        let mv = Move::step(square_at(1, 2), square_at(0, 1), false);
        position.make_move(&mv);
        assert_eq!(position.kings(Color::White), 1);
        position.undo_move(&mv);
        assert_eq!(position.tile(square_at(1, 2)), Tile::WHITE_KING);
        assert_eq!(position.kings(Color::White), 1);
    }

    #[test]
    fn test_terminal_and_winner() {
        let mut position = Position::empty();
        assert!(position.is_game_over());

        position.set(square_at(0, 1), Tile::BLACK_MAN);
        assert!(position.is_game_over());
        assert_eq!(position.winner(), Some(Color::Black));

        position.set(square_at(5, 2), Tile::WHITE_MAN);
        assert!(!position.is_game_over());
        assert_eq!(position.winner(), None);

        position.set(square_at(0, 1), Tile::EMPTY);
        assert_eq!(position.winner(), Some(Color::White));
    }

    #[test]
    fn test_incremental_hash_matches_full_recompute() {
        let mut position = Position::new();
        assert_eq!(position.hash(), position.recompute_hash());

        let mv = Move::step(square_at(5, 4), square_at(4, 5), false);
        position.make_move(&mv);
        assert_eq!(position.hash(), position.recompute_hash());
        position.undo_move(&mv);
        assert_eq!(position.hash(), position.recompute_hash());
    }

    #[test]
    fn test_set_replaces_and_counts() {
        let mut position = Position::empty();
        position.set(square_at(3, 2), Tile::WHITE_MAN);
        position.set(square_at(3, 2), Tile::BLACK_KING);
        assert_eq!(position.pieces_left(Color::White), 0);
        assert_eq!(position.pieces_left(Color::Black), 1);
        assert_eq!(position.kings(Color::Black), 1);
        assert_eq!(position.hash(), position.recompute_hash());
    }
}
