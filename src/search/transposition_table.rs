//! Transposition cache keyed by the composite board hash.
//!
//! Entries are inserted until the configured capacity is reached; after that
//! only keys already present are refreshed. Nothing is ever evicted.

use std::collections::HashMap;

use crate::game_state::position_hash::BoardHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

impl TTEntry {
    /// Whether this entry may stand in for a search of `depth` remaining
    /// plies: it must be at least as deep and belong to the same side to move.
    #[inline]
    pub fn is_usable_at(&self, depth: u8) -> bool {
        self.depth >= depth && (self.depth - depth) % 2 == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    /// Inserts dropped because the table was full.
    pub skipped: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: HashMap<BoardHash, TTEntry>,
    capacity: usize,
    stats: TTStats,
}

impl TranspositionTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    pub fn probe(&mut self, key: BoardHash) -> Option<TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries.get(&key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Insert or refresh `key`. Returns false when a new key was dropped
    /// because the table is at capacity.
    pub fn store(&mut self, key: BoardHash, entry: TTEntry) -> bool {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = entry;
        } else if self.entries.len() < self.capacity {
            self.entries.insert(key, entry);
        } else {
            self.stats.skipped += 1;
            return false;
        }
        self.stats.stores += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TTEntry, TranspositionTable};
    use crate::game_state::position_hash::BoardHash;

    fn key(pieces: u64) -> BoardHash {
        BoardHash { pieces, colors: 0 }
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::with_capacity(8);
        let entry = TTEntry {
            depth: 5,
            score: 42,
            bound: Bound::Exact,
        };
        assert!(tt.store(key(123), entry));
        assert_eq!(tt.probe(key(123)), Some(entry));
        assert_eq!(tt.probe(key(124)), None);

        let stats = tt.stats();
        assert_eq!((stats.probes, stats.hits, stats.stores), (2, 1, 1));
    }

    #[test]
    fn both_hash_words_form_the_key() {
        let mut tt = TranspositionTable::with_capacity(8);
        let entry = TTEntry {
            depth: 1,
            score: 7,
            bound: Bound::LowerBound,
        };
        tt.store(BoardHash { pieces: 1, colors: 0 }, entry);
        assert!(tt.probe(BoardHash { pieces: 1, colors: 1 }).is_none());
    }

    #[test]
    fn full_table_refreshes_but_never_grows() {
        let mut tt = TranspositionTable::with_capacity(2);
        let entry = |score| TTEntry {
            depth: 2,
            score,
            bound: Bound::UpperBound,
        };
        assert!(tt.store(key(1), entry(1)));
        assert!(tt.store(key(2), entry(2)));
        assert!(!tt.store(key(3), entry(3)));
        assert_eq!(tt.len(), 2);
        assert!(tt.probe(key(3)).is_none());

        assert!(tt.store(key(1), entry(10)));
        assert_eq!(tt.probe(key(1)).map(|e| e.score), Some(10));
        assert_eq!(tt.stats().skipped, 1);
    }

    #[test]
    fn usable_entries_match_depth_parity() {
        let entry = TTEntry {
            depth: 4,
            score: 0,
            bound: Bound::Exact,
        };
        assert!(entry.is_usable_at(4));
        assert!(entry.is_usable_at(2));
        assert!(!entry.is_usable_at(3));
        assert!(!entry.is_usable_at(5));
        assert!(!entry.is_usable_at(6));
    }
}
