//! Move generation: simple steps, recursive jump chains, forced jumping
//!
//! Free functions over a [`Position`], in generation order:
//!
//! 1. Per piece, candidate directions: a man steps along its two forward
//!    diagonals, a king along all four.
//! 2. An adjacent empty square yields a non-capturing step.
//! 3. An adjacent opponent piece with an empty square beyond yields a jump,
//!    then the chain is extended recursively from the landing square.
//!    Continuations never reverse the preceding jump direction, which
//!    leaves three directions for kings and two (same row direction) for
//!    men. Every reachable chain length is emitted as its own move, so a
//!    double jump also yields its single-jump prefix as a separate option.
//! 4. With `forced_jumping`, captures are mandatory for the whole turn:
//!    if any capture exists for the side to move, no quiet move is
//!    returned.
//!
//! The board is never mutated during enumeration; each branch carries its
//! own captured-so-far list, so sibling chains cannot contaminate each
//! other. Results are ordered with higher capture counts first, purely to
//! help alpha-beta prune earlier.

use crate::board::{coords_of, on_board, square_at, Position};
use crate::constants::NUM_SQUARES;
use crate::types::{Color, Move, Square};

/// All legal moves for `color` in this position, capture-heavy first.
pub fn legal_moves(position: &Position, color: Color, forced_jumping: bool) -> Vec<Move> {
    let mut moves = Vec::new();
    for square in 0..NUM_SQUARES as Square {
        if position.tile(square).is_color(color) {
            moves.extend(piece_moves(position, square, forced_jumping));
        }
    }

    // Captures are mandatory turn-wide, not merely per piece: one piece's
    // jump silences every other piece's quiet moves.
    if forced_jumping && moves.iter().any(Move::is_jump) {
        moves.retain(Move::is_jump);
    }

    moves.sort_by(|a, b| b.captures().len().cmp(&a.captures().len()));
    moves
}

/// Moves available to the single piece on `square`. Empty squares yield
/// nothing. With `forced_jumping`, a piece that can jump only jumps.
pub fn piece_moves(position: &Position, square: Square, forced_jumping: bool) -> Vec<Move> {
    let piece = position.tile(square);
    let Some(color) = piece.color() else {
        return Vec::new();
    };

    let forward = color.forward();
    let mut directions = vec![(forward, 1), (forward, -1)];
    if piece.is_king() {
        directions.push((-forward, 1));
        directions.push((-forward, -1));
    }

    let (row, col) = coords_of(square);
    let mut steps = Vec::new();
    let mut jumps = Vec::new();

    for &(dr, dc) in &directions {
        let (mid_row, mid_col) = (row + dr, col + dc);
        if !on_board(mid_row, mid_col) {
            continue;
        }
        let mid_square = square_at(mid_row, mid_col);
        let mid_tile = position.tile(mid_square);

        if mid_tile.is_empty() {
            let promotes = !piece.is_king() && mid_row == color.promotion_row();
            steps.push(Move::step(square, mid_square, promotes));
        } else if mid_tile.is_opposite_color(piece) {
            let (land_row, land_col) = (row + 2 * dr, col + 2 * dc);
            if on_board(land_row, land_col) {
                let land_square = square_at(land_row, land_col);
                if position.tile(land_square).is_empty() {
                    let captured = vec![(mid_square, mid_tile)];
                    let promotes = !piece.is_king() && land_row == color.promotion_row();
                    jumps.push(Move::jump(square, land_square, captured.clone(), promotes));
                    extend_chain(position, square, land_square, (dr, dc), &captured, &mut jumps);
                }
            }
        }
    }

    if forced_jumping {
        if jumps.is_empty() {
            return steps;
        }
        return jumps;
    }

    jumps.extend(steps);
    jumps
}

/// Recursively extend a jump chain from `current`, the landing square of the
/// previous jump taken in direction `dir`. The origin piece on `origin`
/// still determines color and king-ness; each successful further jump is
/// appended as an independent, longer move and then extended in turn.
fn extend_chain(
    position: &Position,
    origin: Square,
    current: Square,
    dir: (i8, i8),
    captured_so_far: &[(Square, crate::types::Tile)],
    jumps: &mut Vec<Move>,
) {
    let piece = position.tile(origin);
    let Some(color) = piece.color() else {
        return;
    };

    // No reversing the jump we just made: kings keep three directions, men
    // the two that preserve the row direction.
    let directions: &[(i8, i8)] = if piece.is_king() {
        &[(dir.0, dir.1), (dir.0, -dir.1), (-dir.0, dir.1)]
    } else {
        &[(dir.0, dir.1), (dir.0, -dir.1)]
    };

    let (row, col) = coords_of(current);
    for &(dr, dc) in directions {
        let (mid_row, mid_col) = (row + dr, col + dc);
        if !on_board(mid_row, mid_col) {
            continue;
        }
        let mid_square = square_at(mid_row, mid_col);
        let mid_tile = position.tile(mid_square);
        if !mid_tile.is_opposite_color(piece) {
            continue;
        }
        // The board is not mutated during enumeration, so a piece jumped
        // earlier in this chain still sits on its square. It cannot be
        // captured twice; skipping it also bounds the recursion when a
        // king circles a ring of opponents.
        if captured_so_far.iter().any(|&(sq, _)| sq == mid_square) {
            continue;
        }

        let (land_row, land_col) = (row + 2 * dr, col + 2 * dc);
        if !on_board(land_row, land_col) {
            continue;
        }
        let land_square = square_at(land_row, land_col);
        if !position.tile(land_square).is_empty() {
            continue;
        }

        let mut captured = captured_so_far.to_vec();
        captured.push((mid_square, mid_tile));
        let promotes = !piece.is_king() && land_row == color.promotion_row();
        jumps.push(Move::jump(origin, land_square, captured.clone(), promotes));
        extend_chain(position, origin, land_square, (dr, dc), &captured, jumps);
    }
}
