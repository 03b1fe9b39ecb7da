//! # Alpha-Beta Search - Depth-Limited Minimax with Transposition Caching
//!
//! [`Engine`] owns everything the search needs across calls: the
//! transposition table, node/cutoff/hit telemetry and an optional wall-clock
//! deadline. The search itself is a plain recursive minimax with alpha-beta
//! pruning: black maximizes, white minimizes, and the score scale is the
//! static evaluation's (positive favors black, ±inf for decided games).
//!
//! The position is mutated in place down the whole tree. Every
//! `make_move` on a search path has exactly one matching `undo_move` before
//! control leaves that stack frame, including the early `break` of a beta
//! cutoff and deadline exhaustion; the caller's position is bit-identical
//! when `search` returns.
//!
//! Transposition entries are consulted before anything else and returned
//! on a hit whatever depth they were computed at, as long as the entry can
//! answer the move question (move-less leaf entries only serve at leaf
//! depth). That makes a
//! cached shallow score stand in for a deeper search now and then; the
//! imprecision is accepted in exchange for the cutoff (see the crate docs).
//! Nodes abandoned because the deadline passed are never cached.
//!
//! Reference: https://www.chessprogramming.org/Alpha-Beta

use instant::Instant;
use std::time::Duration;

use crate::board::Position;
use crate::constants::{DEFAULT_DEPTH, TT_SIZE};
use crate::evaluation::evaluate;
use crate::hash::TranspositionTable;
use crate::move_gen::legal_moves;
use crate::types::{Color, Move};

/// Budget for one `best_move` call: a fixed depth and an optional
/// wall-clock cap. Exhausting the clock degrades the result gracefully, it
/// is not an error.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub depth: u8,
    pub time_budget: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth: DEFAULT_DEPTH,
            time_budget: None,
        }
    }
}

impl SearchLimits {
    /// Fixed-depth budget with no clock.
    pub fn depth(depth: u8) -> Self {
        SearchLimits {
            depth,
            time_budget: None,
        }
    }
}

/// The search engine: transposition table, statistics, deadline.
///
/// One engine serves one game; call [`Engine::reset`] when a new game
/// starts so stale cache entries cannot leak across games.
pub struct Engine {
    tt: TranspositionTable,
    nodes: u64,
    cutoffs: u64,
    deadline: Option<Instant>,
    stopped: bool,
}

impl Engine {
    pub fn new() -> Self {
        Engine::with_table_capacity(TT_SIZE)
    }

    /// Engine with a custom transposition table size (slots, rounded up to
    /// a power of two). Useful for tests and memory-constrained callers.
    pub fn with_table_capacity(capacity: usize) -> Self {
        Engine {
            tt: TranspositionTable::new(capacity),
            nodes: 0,
            cutoffs: 0,
            deadline: None,
            stopped: false,
        }
    }

    /// Clear the transposition table and all statistics. Tie this to "new
    /// game started".
    pub fn reset(&mut self) {
        self.tt.reset();
        self.nodes = 0;
        self.cutoffs = 0;
        self.deadline = None;
        self.stopped = false;
    }

    /// Nodes visited by the most recent `best_move` call.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Beta cutoffs taken by the most recent `best_move` call.
    #[inline]
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// Transposition hits since the engine was created or reset.
    #[inline]
    pub fn tt_hits(&self) -> u64 {
        self.tt.hits()
    }

    /// Pick the best move for `side` under `limits`.
    ///
    /// Returns the move and its minimax score on the fixed black-positive
    /// scale, or `None` when `side` has no legal move (which is a loss for
    /// that side; reporting it is the caller's job).
    pub fn best_move(
        &mut self,
        position: &mut Position,
        side: Color,
        forced_jumping: bool,
        limits: SearchLimits,
    ) -> Option<(Move, f64)> {
        self.nodes = 0;
        self.cutoffs = 0;
        self.stopped = false;
        self.deadline = limits.time_budget.map(|budget| Instant::now() + budget);

        let (score, best) = self.search(
            position,
            limits.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            side == Color::Black,
            forced_jumping,
        );

        // A budget that expires before the first root child is searched
        // leaves no best move. Fall back to the first generated move
        // (captures first) so `None` keeps meaning "no legal move".
        let best = if best.is_none() && self.stopped {
            legal_moves(position, side, forced_jumping).into_iter().next()
        } else {
            best
        };

        tracing::debug!(
            nodes = self.nodes,
            cutoffs = self.cutoffs,
            tt_hits = self.tt.hits(),
            tt_stores = self.tt.stores(),
            depth = limits.depth,
            stopped_early = self.stopped,
            score,
            "search finished"
        );

        best.map(|mv| (mv, score))
    }

    /// Recursive alpha-beta. `maximizing` is true when black is to move.
    ///
    /// Returns the node's minimax value and the move achieving it (`None`
    /// at evaluated leaves and when the side to move has no legal move, in
    /// which case the value is the losing extreme).
    pub fn search(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        forced_jumping: bool,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        if let Some(deadline) = self.deadline {
            if !self.stopped && Instant::now() >= deadline {
                self.stopped = true;
            }
        }
        if self.stopped {
            // Out of time: report the static value and let every ancestor
            // fall back to what it has explored so far.
            return (evaluate(position), None);
        }

        let key = self.tt_key(position, maximizing);
        if let Some(entry) = self.tt.probe(key) {
            // A leaf entry carries no move. Above leaf depth it answers the
            // score question but not the move question, so the cutoff is
            // only taken when a move is present or none is needed.
            if depth == 0 || entry.best_move.is_some() {
                return (entry.score, entry.best_move.clone());
            }
        }

        if depth == 0 || position.is_game_over() {
            let score = evaluate(position);
            self.tt.store(key, score, None, 0);
            return (score, None);
        }

        let color = if maximizing { Color::Black } else { Color::White };
        let moves = legal_moves(position, color, forced_jumping);
        let mut best_move = None;

        let best_score = if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &moves {
                position.make_move(mv);
                let (score, _) =
                    self.search(position, depth - 1, alpha, beta, false, forced_jumping);
                position.undo_move(mv);

                if score > best {
                    best = score;
                    best_move = Some(mv.clone());
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
                if self.stopped {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in &moves {
                position.make_move(mv);
                let (score, _) =
                    self.search(position, depth - 1, alpha, beta, true, forced_jumping);
                position.undo_move(mv);

                if score < best {
                    best = score;
                    best_move = Some(mv.clone());
                }
                beta = beta.min(score);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
                if self.stopped {
                    break;
                }
            }
            best
        };

        if !self.stopped {
            self.tt.store(key, best_score, best_move.clone(), depth);
        }
        (best_score, best_move)
    }

    #[inline]
    fn tt_key(&self, position: &Position, maximizing: bool) -> u64 {
        if maximizing {
            position.hash() ^ position.zobrist().black_to_move()
        } else {
            position.hash()
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
