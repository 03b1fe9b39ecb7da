//! Static evaluation: seven weighted positional features per side
//!
//! One scan over the 32 playable squares accumulates, per side: plain
//! pieces, kings, back-row pieces, center-box pieces (the 2x4 box on rows
//! 3-4, columns 2-5), mid-row pieces outside the box, pieces the opponent
//! can capture next turn, and protected pieces. The score is the weighted
//! sum of the black-minus-white feature differences; positive favors black,
//! the engine's fixed maximizing side.
//!
//! The weight vector and the exact feature predicates are tuned as a unit
//! and must not drift; in particular the "protected" test checks the two
//! rearward diagonals for own-color-or-non-king occupants (an empty
//! neighbor counts as protecting) and a back-row piece scores protected
//! without any further feature checks. Tests pin this behavior.

use crate::board::{coords_of, is_dark_square, square_at, Position};
use crate::constants::*;
use crate::types::{Color, Square};

/// Evaluate `position`. `+inf` when white has no pieces left, `-inf` when
/// black has none; otherwise the weighted feature sum.
pub fn evaluate(position: &Position) -> f64 {
    if position.pieces_left(Color::White) == 0 {
        return f64::INFINITY;
    }
    if position.pieces_left(Color::Black) == 0 {
        return f64::NEG_INFINITY;
    }

    let mut whites = [0i32; EVAL_FEATURES];
    let mut blacks = [0i32; EVAL_FEATURES];

    whites[0] = i32::from(position.pieces_left(Color::White) - position.kings(Color::White));
    blacks[0] = i32::from(position.pieces_left(Color::Black) - position.kings(Color::Black));
    whites[1] = i32::from(position.kings(Color::White));
    blacks[1] = i32::from(position.kings(Color::Black));

    let at = |row: i8, col: i8| position.tile(square_at(row, col));

    for square in 0..NUM_SQUARES as Square {
        let (row, col) = coords_of(square);
        if !is_dark_square(row, col) {
            continue;
        }
        let tile = position.tile(square);
        if tile.is_empty() {
            continue;
        }

        if tile.is_white() {
            // The home row protects by itself and counts nothing else.
            if row == BOTTOM_BORDER {
                whites[2] += 1;
                whites[6] += 1;
                continue;
            }

            if row == 3 || row == 4 {
                if (2..=5).contains(&col) {
                    whites[3] += 1;
                } else {
                    whites[4] += 1;
                }
            }

            // Capturable: a black piece ahead with the landing square
            // behind this piece empty, on either diagonal.
            if row > TOP_BORDER && col > LEFT_BORDER && col < RIGHT_BORDER {
                if at(row - 1, col - 1).is_black() && at(row + 1, col + 1).is_empty() {
                    whites[5] += 1;
                }
                if at(row - 1, col + 1).is_black() && at(row + 1, col - 1).is_empty() {
                    whites[5] += 1;
                }
            }

            // Protected: board edge, or neither rearward diagonal holds an
            // opposing king.
            if row < BOTTOM_BORDER {
                if col == LEFT_BORDER || col == RIGHT_BORDER {
                    whites[6] += 1;
                } else if (at(row + 1, col - 1).is_white() || !at(row + 1, col - 1).is_king())
                    && (at(row + 1, col + 1).is_white() || !at(row + 1, col + 1).is_king())
                {
                    whites[6] += 1;
                }
            }
        } else {
            if row == TOP_BORDER {
                blacks[2] += 1;
                blacks[6] += 1;
                continue;
            }

            if row == 3 || row == 4 {
                if (2..=5).contains(&col) {
                    blacks[3] += 1;
                } else {
                    blacks[4] += 1;
                }
            }

            if row < BOTTOM_BORDER && col > LEFT_BORDER && col < RIGHT_BORDER {
                if at(row + 1, col - 1).is_white() && at(row - 1, col + 1).is_empty() {
                    blacks[5] += 1;
                }
                if at(row + 1, col + 1).is_white() && at(row - 1, col - 1).is_empty() {
                    blacks[5] += 1;
                }
            }

            if row > TOP_BORDER {
                if col == LEFT_BORDER || col == RIGHT_BORDER {
                    blacks[6] += 1;
                } else if (at(row - 1, col - 1).is_black() || !at(row - 1, col - 1).is_king())
                    && (at(row - 1, col + 1).is_black() || !at(row - 1, col + 1).is_king())
                {
                    blacks[6] += 1;
                }
            }
        }
    }

    let mut score = 0.0;
    for i in 0..EVAL_FEATURES {
        score += EVAL_WEIGHTS[i] * f64::from(blacks[i] - whites[i]);
    }
    score
}
