//! Zobrist hashing and the transposition table
//!
//! A position hashes to the XOR of one random 64-bit key per occupied
//! (piece-kind, square) pair. XOR is its own inverse, so make/undo maintain
//! the hash incrementally by toggling the keys of the squares that changed.
//! The transposition table maps that hash to a previously computed search
//! result so repeated positions are not searched twice.
//!
//! Both tables are explicit values owned by their users (the [`crate::board::Position`]
//! owns its `Zobrist`, the search engine owns its `TranspositionTable`);
//! there are no process-wide singletons.
//!
//! Reference: https://www.chessprogramming.org/Zobrist_Hashing

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{NUM_SQUARES, PIECE_KINDS, TT_SIZE, ZOBRIST_SEED};
use crate::types::{Move, Square, Tile};

/// Random key table for position hashing.
///
/// Built from a fixed seed by default so that every independently created
/// `Zobrist` agrees on all keys; two positions reached through different
/// move orders then hash identically.
#[derive(Debug, Clone)]
pub struct Zobrist {
    piece_square: [[u64; NUM_SQUARES]; PIECE_KINDS],
    black_to_move: u64,
}

impl Zobrist {
    /// Build the key table from the given seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_square = [[0u64; NUM_SQUARES]; PIECE_KINDS];
        for kind in piece_square.iter_mut() {
            for key in kind.iter_mut() {
                *key = rng.random::<u64>();
            }
        }
        Zobrist {
            piece_square,
            black_to_move: rng.random::<u64>(),
        }
    }

    /// Key for a non-empty tile standing on `square`. Empty tiles contribute
    /// nothing to a hash and have no key.
    #[inline]
    pub fn key(&self, tile: Tile, square: Square) -> u64 {
        match tile.kind_index() {
            Some(kind) => self.piece_square[kind][square as usize],
            None => 0,
        }
    }

    /// Key toggled into a transposition lookup when black is to move, so the
    /// same arrangement with different sides to move does not alias.
    #[inline]
    pub fn black_to_move(&self) -> u64 {
        self.black_to_move
    }

    /// Hash of a full board, computed from scratch. The incremental hash in
    /// `Position` must always equal this.
    pub fn full_hash(&self, tiles: &[Tile; NUM_SQUARES]) -> u64 {
        let mut hash = 0u64;
        for (square, &tile) in tiles.iter().enumerate() {
            if !tile.is_empty() {
                hash ^= self.key(tile, square as Square);
            }
        }
        hash
    }
}

impl Default for Zobrist {
    fn default() -> Self {
        Zobrist::new(ZOBRIST_SEED)
    }
}

/// A cached search result for one position.
#[derive(Debug, Clone)]
pub struct TtEntry {
    key: u64,
    pub score: f64,
    pub best_move: Option<Move>,
    pub depth: u8,
}

/// Fixed-size, directly indexed cache from position hash to search result.
///
/// Indexing is `hash % capacity`; the full 64-bit key is stored and verified
/// on probe so an index collision reads as a miss, not as a wrong entry.
/// A probe deliberately ignores the stored depth: an entry computed at a
/// shallower remaining depth is still returned, trading exactness for speed.
#[derive(Debug)]
pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    hits: u64,
    stores: u64,
}

impl TranspositionTable {
    /// Create a table with `capacity` slots (rounded up to a power of two).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.next_power_of_two().max(2);
        TranspositionTable {
            entries: vec![None; capacity],
            hits: 0,
            stores: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        key as usize & (self.entries.len() - 1)
    }

    /// Look up `key`; counts a hit only on a full-key match.
    pub fn probe(&mut self, key: u64) -> Option<&TtEntry> {
        let index = self.index(key);
        let hit = matches!(&self.entries[index], Some(entry) if entry.key == key);
        if hit {
            self.hits += 1;
            self.entries[index].as_ref()
        } else {
            None
        }
    }

    /// Store a result. A same-key entry is only replaced by an equal or
    /// deeper search; a colliding different-key entry is simply overwritten
    /// (entries are pure recomputable caches, last writer wins).
    pub fn store(&mut self, key: u64, score: f64, best_move: Option<Move>, depth: u8) {
        let index = self.index(key);
        if let Some(existing) = &self.entries[index] {
            if existing.key == key && existing.depth > depth {
                return;
            }
        }
        self.entries[index] = Some(TtEntry {
            key,
            score,
            best_move,
            depth,
        });
        self.stores += 1;
    }

    /// Drop all entries and statistics. Called when a new game starts.
    pub fn reset(&mut self) {
        self.entries.iter_mut().for_each(|slot| *slot = None);
        self.hits = 0;
        self.stores = 0;
    }

    /// Number of successful probes since the last reset.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of stored entries since the last reset (including overwrites).
    #[inline]
    pub fn stores(&self) -> u64 {
        self.stores
    }

    /// Slot count of the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(TT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zobrist_same_seed_same_keys() {
        let a = Zobrist::new(42);
        let b = Zobrist::new(42);
        assert_eq!(a.key(Tile::WHITE_MAN, 12), b.key(Tile::WHITE_MAN, 12));
        assert_eq!(a.black_to_move(), b.black_to_move());

        let c = Zobrist::new(43);
        assert_ne!(
            a.key(Tile::WHITE_MAN, 12),
            c.key(Tile::WHITE_MAN, 12),
            "different seeds should give different keys"
        );
    }

    #[test]
    fn test_zobrist_keys_distinguish_kind_and_square() {
        let z = Zobrist::default();
        assert_ne!(z.key(Tile::WHITE_MAN, 12), z.key(Tile::WHITE_KING, 12));
        assert_ne!(z.key(Tile::WHITE_MAN, 12), z.key(Tile::WHITE_MAN, 13));
        assert_ne!(z.key(Tile::WHITE_MAN, 12), z.key(Tile::BLACK_MAN, 12));
        assert_eq!(z.key(Tile::EMPTY, 12), 0);
    }

    #[test]
    fn test_tt_store_and_probe() {
        let mut tt = TranspositionTable::new(64);
        assert!(tt.probe(0xABCD).is_none());

        tt.store(0xABCD, 2.5, Some(Move::step(44, 37, false)), 3);
        let entry = tt.probe(0xABCD).expect("stored entry should be found");
        assert_eq!(entry.score, 2.5);
        assert_eq!(entry.depth, 3);
        assert!(entry.best_move.is_some());
        assert_eq!(tt.hits(), 1);
    }

    #[test]
    fn test_tt_index_collision_reads_as_miss() {
        let mut tt = TranspositionTable::new(64);
        // Same slot (mod 64), different full keys.
        tt.store(64, 1.0, None, 1);
        assert!(tt.probe(128).is_none(), "colliding key must not match");
    }

    #[test]
    fn test_tt_same_key_keeps_deeper_entry() {
        let mut tt = TranspositionTable::new(64);
        tt.store(7, 4.0, None, 5);
        tt.store(7, -1.0, None, 2);
        let entry = tt.probe(7).expect("entry should remain");
        assert_eq!(entry.score, 4.0, "shallower store must not evict deeper");

        tt.store(7, -1.0, None, 5);
        let entry = tt.probe(7).expect("entry should remain");
        assert_eq!(entry.score, -1.0, "equal-depth store replaces");
    }

    #[test]
    fn test_tt_reset_clears_entries_and_stats() {
        let mut tt = TranspositionTable::new(64);
        tt.store(9, 1.0, None, 1);
        tt.probe(9);
        tt.reset();
        assert!(tt.probe(9).is_none());
        assert_eq!(tt.hits(), 0);
        assert_eq!(tt.stores(), 0);
    }
}
