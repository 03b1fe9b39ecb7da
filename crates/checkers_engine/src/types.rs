//! # Core Value Types - Tiles, Colors and Moves
//!
//! The three value types every other module is built on:
//!
//! - [`Tile`] - a compact bitfield for the content of one square
//!   (empty / white man / black man / white king / black king).
//! - [`Color`] - the two sides, with the geometry that depends on the side
//!   (forward direction, promotion row).
//! - [`Move`] - an immutable description of one turn: source square, final
//!   destination, and every piece removed along the way in removal order.
//!
//! `Move` records enough to *undo* itself exactly: each capture entry stores
//! the captured tile value (man vs. king matters when the piece comes back),
//! and `promotes` records whether the mover was crowned on arrival. Without
//! the latter, a king that merely visits the back rank would be
//! indistinguishable from a man promoted there, and undo could not restore
//! the prior rank.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Linear square index into the 8x8 board, row-major, 0..63.
pub type Square = i8;

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing side.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward (non-capturing) man move. White moves toward
    /// row 0, black toward row 7.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which a man of this color is crowned.
    #[inline]
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => TOP_BORDER,
            Color::Black => BOTTOM_BORDER,
        }
    }

    /// The defensive home row of this color.
    #[inline]
    pub fn back_row(self) -> i8 {
        match self {
            Color::White => BOTTOM_BORDER,
            Color::Black => TOP_BORDER,
        }
    }

    /// An uncrowned piece of this color.
    #[inline]
    pub fn man(self) -> Tile {
        match self {
            Color::White => Tile::WHITE_MAN,
            Color::Black => Tile::BLACK_MAN,
        }
    }

    /// A crowned piece of this color.
    #[inline]
    pub fn king(self) -> Tile {
        match self {
            Color::White => Tile::WHITE_KING,
            Color::Black => Tile::BLACK_KING,
        }
    }
}

/// Content of one board square as a 3-bit value.
///
/// Bit 0 = white, bit 1 = black, bit 2 = king. The five valid values are the
/// associated constants below; all query methods are total over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile(u8);

impl Tile {
    pub const EMPTY: Tile = Tile(0);
    pub const WHITE_MAN: Tile = Tile(WHITE_BIT);
    pub const BLACK_MAN: Tile = Tile(BLACK_BIT);
    pub const WHITE_KING: Tile = Tile(WHITE_BIT | KING_BIT);
    pub const BLACK_KING: Tile = Tile(BLACK_BIT | KING_BIT);

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self.0 & WHITE_BIT != 0
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self.0 & BLACK_BIT != 0
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.0 & KING_BIT != 0
    }

    /// Color of the piece on this tile, or `None` for an empty square.
    #[inline]
    pub fn color(self) -> Option<Color> {
        if self.is_white() {
            Some(Color::White)
        } else if self.is_black() {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// True if the tile holds a piece of `color`.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True if both tiles hold pieces and their colors differ.
    #[inline]
    pub fn is_opposite_color(self, other: Tile) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// The crowned version of this tile. EMPTY stays EMPTY.
    #[inline]
    pub fn promoted(self) -> Tile {
        match self.color() {
            Some(c) => c.king(),
            None => Tile::EMPTY,
        }
    }

    /// The uncrowned version of this tile. EMPTY stays EMPTY.
    #[inline]
    pub fn demoted(self) -> Tile {
        match self.color() {
            Some(c) => c.man(),
            None => Tile::EMPTY,
        }
    }

    /// Zobrist kind index (0 = white man, 1 = black man, 2 = white king,
    /// 3 = black king); `None` for an empty tile.
    #[inline]
    pub(crate) fn kind_index(self) -> Option<usize> {
        match self {
            Tile::WHITE_MAN => Some(0),
            Tile::BLACK_MAN => Some(1),
            Tile::WHITE_KING => Some(2),
            Tile::BLACK_KING => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Tile::WHITE_MAN => 'w',
            Tile::BLACK_MAN => 'b',
            Tile::WHITE_KING => 'W',
            Tile::BLACK_KING => 'B',
            _ => '.',
        };
        write!(f, "{c}")
    }
}

/// One turn of one piece: a simple diagonal step or a chain of jumps.
///
/// Immutable after construction. A non-capturing move has an empty capture
/// list; a capturing move lists every captured square with the tile value
/// that stood there, in the order the jumps remove them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    src: Square,
    dst: Square,
    captures: Vec<(Square, Tile)>,
    promotes: bool,
}

impl Move {
    /// A non-capturing step.
    pub fn step(src: Square, dst: Square, promotes: bool) -> Self {
        Move {
            src,
            dst,
            captures: Vec::new(),
            promotes,
        }
    }

    /// A capturing move (one jump or a whole chain).
    pub fn jump(src: Square, dst: Square, captures: Vec<(Square, Tile)>, promotes: bool) -> Self {
        Move {
            src,
            dst,
            captures,
            promotes,
        }
    }

    /// Square the piece starts from.
    #[inline]
    pub fn src(&self) -> Square {
        self.src
    }

    /// Square the piece finally lands on.
    #[inline]
    pub fn dst(&self) -> Square {
        self.dst
    }

    /// Captured squares and the tiles removed from them, in jump order.
    #[inline]
    pub fn captures(&self) -> &[(Square, Tile)] {
        &self.captures
    }

    /// True if this move captures at least one piece.
    #[inline]
    pub fn is_jump(&self) -> bool {
        !self.captures.is_empty()
    }

    /// True if the mover is crowned on arrival.
    #[inline]
    pub fn promotes(&self) -> bool {
        self.promotes
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}:", self.src, self.dst)?;
        for (sq, tile) in &self.captures {
            write!(f, " x{sq}({tile})")?;
        }
        if self.promotes {
            write!(f, " K")?;
        }
        Ok(())
    }
}
