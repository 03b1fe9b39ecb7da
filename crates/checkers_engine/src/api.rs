//! # Engine API - Validated Game Operations
//!
//! Thin, validated wrappers over the core board and search modules. The
//! core (`board`, `move_gen`, `search`) trusts its inputs for speed; this
//! module is the boundary where moves from a UI, a network peer or a saved
//! game are checked before they touch the position.
//!
//! A driver loop looks like:
//!
//! ```
//! use checkers_engine::api;
//! use checkers_engine::search::{Engine, SearchLimits};
//! use checkers_engine::types::Color;
//!
//! let mut position = api::new_game();
//! let mut engine = Engine::new();
//!
//! if let Some(mv) = api::choose_move(
//!     &mut engine,
//!     &mut position,
//!     Color::Black,
//!     true,
//!     SearchLimits::depth(4),
//! ) {
//!     api::apply(&mut position, Color::Black, &mv, true).unwrap();
//! }
//! ```

use crate::board::{coords_of, Position};
use crate::constants::NUM_SQUARES;
use crate::error::{EngineError, EngineResult};
use crate::move_gen::legal_moves;
use crate::search::{Engine, SearchLimits};
use crate::types::{Color, Move, Square};

/// A fresh game in the standard starting arrangement.
pub fn new_game() -> Position {
    Position::new()
}

/// Every legal move for `color`, under the given capture rule.
pub fn moves_for(position: &Position, color: Color, forced_jumping: bool) -> Vec<Move> {
    legal_moves(position, color, forced_jumping)
}

/// True once either side has no pieces left.
pub fn is_terminal(position: &Position) -> bool {
    position.is_game_over()
}

/// The side that captured everything, or `None` while the game runs.
pub fn winner(position: &Position) -> Option<Color> {
    position.winner()
}

/// Validate `mv` as a legal move for `color` and play it.
///
/// The move must originate from a square holding one of `color`'s pieces
/// and must be one of the moves [`moves_for`] generates under the same
/// `forced_jumping` rule. On any failure the position is untouched.
pub fn apply(
    position: &mut Position,
    color: Color,
    mv: &Move,
    forced_jumping: bool,
) -> EngineResult<()> {
    check_square(mv.src())?;
    check_square(mv.dst())?;

    let tile = position.tile(mv.src());
    if tile.is_empty() {
        return Err(EngineError::EmptySquare { square: mv.src() });
    }
    if !tile.is_color(color) {
        return Err(EngineError::WrongColor {
            square: mv.src(),
            color,
        });
    }
    if !legal_moves(position, color, forced_jumping).contains(mv) {
        return Err(EngineError::IllegalMove {
            src: mv.src(),
            dst: mv.dst(),
            color,
        });
    }

    position.make_move(mv);
    Ok(())
}

/// Take back `mv`, the most recently applied move.
///
/// Checks that the board is in the state `mv` produced (piece on the
/// destination, source and captured squares vacant) before undoing; a
/// mismatch means `mv` was not the last move played and is rejected.
pub fn revert(position: &mut Position, mv: &Move) -> EngineResult<()> {
    check_square(mv.src())?;
    check_square(mv.dst())?;

    let mismatch = EngineError::UndoMismatch {
        src: mv.src(),
        dst: mv.dst(),
    };
    if position.tile(mv.dst()).is_empty() || !position.tile(mv.src()).is_empty() {
        return Err(mismatch);
    }
    // A promoting move must have left a freshly crowned king on its own
    // promotion row; anything else on the destination means `mv` was not
    // the move just played.
    if mv.promotes() {
        let landed = position.tile(mv.dst());
        let crowned_here = landed
            .color()
            .is_some_and(|c| landed.is_king() && coords_of(mv.dst()).0 == c.promotion_row());
        if !crowned_here {
            return Err(mismatch);
        }
    }
    for &(square, _) in mv.captures() {
        if !position.tile(square).is_empty() {
            return Err(mismatch);
        }
    }

    position.undo_move(mv);
    Ok(())
}

/// Search for the best move for `side` and return it, or `None` when `side`
/// has no legal move. The position is unchanged either way.
pub fn choose_move(
    engine: &mut Engine,
    position: &mut Position,
    side: Color,
    forced_jumping: bool,
    limits: SearchLimits,
) -> Option<Move> {
    engine
        .best_move(position, side, forced_jumping, limits)
        .map(|(mv, _)| mv)
}

#[inline]
fn check_square(square: Square) -> EngineResult<()> {
    if (0..NUM_SQUARES as Square).contains(&square) {
        Ok(())
    } else {
        Err(EngineError::InvalidSquare { square })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square_at;
    use crate::types::Tile;

    #[test]
    fn test_apply_plays_a_legal_opening_move() {
        let mut position = new_game();
        let mv = Move::step(square_at(2, 1), square_at(3, 2), false);
        apply(&mut position, Color::Black, &mv, false).expect("legal opening step");
        assert!(position.tile(square_at(2, 1)).is_empty());
        assert_eq!(position.tile(square_at(3, 2)), Tile::BLACK_MAN);
    }

    #[test]
    fn test_apply_rejects_empty_source() {
        let mut position = new_game();
        let mv = Move::step(square_at(4, 1), square_at(3, 0), false);
        let err = apply(&mut position, Color::White, &mv, false).unwrap_err();
        assert_eq!(
            err,
            EngineError::EmptySquare {
                square: square_at(4, 1)
            }
        );
    }

    #[test]
    fn test_apply_rejects_wrong_color() {
        let mut position = new_game();
        let mv = Move::step(square_at(2, 1), square_at(3, 2), false);
        let err = apply(&mut position, Color::White, &mv, false).unwrap_err();
        assert!(matches!(err, EngineError::WrongColor { .. }));
    }

    #[test]
    fn test_apply_rejects_off_board_square() {
        let mut position = new_game();
        let mv = Move::step(64, 72, false);
        let err = apply(&mut position, Color::Black, &mv, false).unwrap_err();
        assert_eq!(err, EngineError::InvalidSquare { square: 64 });
    }

    #[test]
    fn test_forced_jumping_rejects_quiet_move() {
        let mut position = Position::empty();
        position.set(square_at(2, 3), Tile::BLACK_MAN);
        position.set(square_at(3, 4), Tile::WHITE_MAN);
        position.set(square_at(7, 0), Tile::WHITE_MAN);

        let quiet = Move::step(square_at(2, 3), square_at(3, 2), false);
        let err = apply(&mut position, Color::Black, &quiet, true).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { .. }));

        // The same step is fine once captures are optional.
        apply(&mut position, Color::Black, &quiet, false).expect("quiet move when not forced");
    }

    #[test]
    fn test_apply_then_revert_restores_everything() {
        let mut position = new_game();
        let before_hash = position.hash();

        let moves = moves_for(&position, Color::Black, false);
        let mv = moves.first().expect("black has opening moves").clone();
        apply(&mut position, Color::Black, &mv, false).expect("apply");
        revert(&mut position, &mv).expect("revert");

        assert_eq!(position.hash(), before_hash);
        assert_eq!(position.pieces_left(Color::Black), 12);
    }

    #[test]
    fn test_revert_rejects_fabricated_promotion() {
        // Occupancy matches the move, but the "promoted" piece on the
        // destination is a plain man, so this move was never played.
        let mut position = Position::empty();
        position.set(square_at(0, 1), Tile::WHITE_MAN);
        position.set(square_at(7, 6), Tile::BLACK_MAN);

        let mv = Move::step(square_at(1, 2), square_at(0, 1), true);
        let err = revert(&mut position, &mv).unwrap_err();
        assert!(matches!(err, EngineError::UndoMismatch { .. }));
        assert_eq!(position.tile(square_at(0, 1)), Tile::WHITE_MAN);
    }

    #[test]
    fn test_revert_rejects_move_that_was_not_played() {
        let mut position = new_game();
        let mv = Move::step(square_at(2, 1), square_at(3, 2), false);
        let err = revert(&mut position, &mv).unwrap_err();
        assert!(matches!(err, EngineError::UndoMismatch { .. }));
    }

    #[test]
    fn test_choose_move_leaves_position_intact() {
        let mut position = new_game();
        let mut engine = Engine::with_table_capacity(1 << 12);
        let hash = position.hash();

        let mv = choose_move(
            &mut engine,
            &mut position,
            Color::White,
            false,
            SearchLimits::depth(3),
        );
        assert!(mv.is_some());
        assert_eq!(position.hash(), hash);
    }
}
