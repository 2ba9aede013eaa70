//! Fixed-depth NegaScout search with a transposition cache.
//!
//! The board passed to [`NegaScoutSearch::search`] is used as a scratchpad:
//! each child is explored under an [`AppliedMove`] guard, so the board is
//! restored on every exit path and is unchanged when the search returns.
//! Leaf scores are the static evaluation scaled by [`EVAL_SCALE`] plus one
//! pseudorandom byte, which breaks ties without overturning a real
//! difference.

use tracing::{debug, trace};

use crate::game_state::applied_move::AppliedMove;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{DEFAULT_TT_CAPACITY, EVAL_SCALE};
use crate::game_state::checkers_types::PlayerColor;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::moves::checkers_move::Move;
use crate::search::board_scoring::{BoardScorer, PieceRowScorer};
use crate::search::transposition_table::{Bound, TTEntry, TTStats, TranspositionTable};
use crate::search::xorshift::XorShiftRandom;

/// Window sentinel; no reachable score gets this far.
pub const INFINITY: i32 = 1_000_000_000;
/// Score of a side with no legal move.
pub const LOSS_SCORE: i32 = -INFINITY + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub tt_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            tt_capacity: DEFAULT_TT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub researches: u64,
    pub cutoffs: u64,
    pub tt: TTStats,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

pub struct NegaScoutSearch<S: BoardScorer = PieceRowScorer> {
    config: SearchConfig,
    tt: TranspositionTable,
    scorer: S,
    rng: XorShiftRandom,
    stats: SearchStats,
    root_best: Option<Move>,
}

impl NegaScoutSearch<PieceRowScorer> {
    /// Search with the default evaluation; `seed` fixes the noise stream.
    pub fn new(config: SearchConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => XorShiftRandom::from_seed(seed),
            None => XorShiftRandom::from_entropy(),
        };
        Self::with_scorer(config, PieceRowScorer, rng)
    }
}

impl<S: BoardScorer> NegaScoutSearch<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S, rng: XorShiftRandom) -> Self {
        Self {
            tt: TranspositionTable::with_capacity(config.tt_capacity),
            config,
            scorer,
            rng,
            stats: SearchStats::default(),
            root_best: None,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Search `config.max_depth` plies for `player`.
    ///
    /// The transposition cache is kept between calls on the same instance.
    pub fn search(&mut self, board: &mut Board, player: PlayerColor) -> SearchResult {
        self.stats = SearchStats::default();
        self.root_best = None;

        let score = self.negascout(board, player, self.config.max_depth, -INFINITY, INFINITY);

        self.stats.tt = self.tt.stats();
        let result = SearchResult {
            best_move: self.root_best.take(),
            score,
            stats: self.stats,
        };
        debug!(
            ?player,
            depth = self.config.max_depth,
            score,
            nodes = result.stats.nodes,
            tt_entries = self.tt.len(),
            tt_capacity = self.tt.capacity(),
            "negascout search finished"
        );
        result
    }

    /// Static evaluation for `player` plus one byte of noise.
    fn evaluate(&mut self, board: &Board, player: PlayerColor) -> i32 {
        self.stats.leaves += 1;
        self.scorer.score(board, player) * EVAL_SCALE + i32::from(self.rng.next_byte())
    }

    fn negascout(
        &mut self,
        board: &mut Board,
        player: PlayerColor,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.evaluate(board, player);
        }

        let moves = generate_all_moves(board, player);
        if moves.is_empty() {
            return LOSS_SCORE;
        }

        let is_root = depth == self.config.max_depth;
        let alpha_orig = alpha;
        let key = board.hash();
        // The root always searches so that it can report a move.
        let cached = if is_root { None } else { self.tt.probe(key) };
        if let Some(entry) = cached.filter(|e| e.is_usable_at(depth)) {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }

        let mut best = -INFINITY;

        for (i, mv) in moves.iter().enumerate() {
            let score = {
                let mut child = AppliedMove::new(board, mv);
                let opponent = player.opposite();
                if i == 0 {
                    -self.negascout(&mut child, opponent, depth - 1, -beta, -alpha)
                } else {
                    let probe = -self.negascout(&mut child, opponent, depth - 1, -alpha - 1, -alpha);
                    if alpha < probe && probe < beta {
                        self.stats.researches += 1;
                        -self.negascout(&mut child, opponent, depth - 1, -beta, -probe)
                    } else {
                        probe
                    }
                }
            };

            if score > best {
                best = score;
                if is_root {
                    trace!(mv = ?mv.cells, score, "new best root move");
                    self.root_best = Some(mv.clone());
                }
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::UpperBound
        } else if best >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        self.tt.store(
            key,
            TTEntry {
                depth,
                score: best,
                bound,
            },
        );

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Cell, PieceType};
    use crate::move_generation::legal_move_generator::is_legal_move;

    fn search_with(depth: u8, seed: u64) -> NegaScoutSearch {
        NegaScoutSearch::new(
            SearchConfig {
                max_depth: depth,
                tt_capacity: 1 << 16,
            },
            Some(seed),
        )
    }

    #[test]
    fn depth_zero_is_noisy_static_evaluation() {
        let mut board = Board::from_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . w . . . . .
            . . . . . . . .
            . . b . . . . .
            . . . . . . . .
            ",
        )
        .expect("valid diagram");
        let base = PieceRowScorer.score(&board, PlayerColor::White) * EVAL_SCALE;
        assert_eq!(base, (8 - 11) * EVAL_SCALE);

        let result = search_with(0, 1).search(&mut board, PlayerColor::White);
        assert!(result.best_move.is_none());
        assert!(result.score >= base && result.score < base + EVAL_SCALE);
    }

    #[test]
    fn single_legal_move_is_returned() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(2, 7), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(7, 0), PlayerColor::Black, PieceType::Normal);

        let result = search_with(1, 3).search(&mut board, PlayerColor::White);
        let best = result.best_move.expect("one legal move");
        assert_eq!(best.cells, vec![Cell::new(2, 7), Cell::new(3, 6)]);
    }

    #[test]
    fn no_legal_move_is_a_loss() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(0, 1), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(1, 0), PlayerColor::Black, PieceType::Normal);
        board.set_piece(Cell::new(1, 2), PlayerColor::Black, PieceType::Normal);
        board.set_piece(Cell::new(2, 3), PlayerColor::Black, PieceType::Normal);

        let result = search_with(4, 5).search(&mut board, PlayerColor::White);
        assert_eq!(result.score, LOSS_SCORE);
        assert!(result.best_move.is_none());
    }

    #[test]
    fn does_not_hang_a_man() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(2, 1), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(4, 3), PlayerColor::Black, PieceType::Normal);

        for seed in 0..8 {
            let result = search_with(2, seed).search(&mut board, PlayerColor::White);
            let best = result.best_move.expect("white can move");
            assert_eq!(best.destination(), Cell::new(3, 0));
        }
    }

    #[test]
    fn finds_a_winning_capture() {
        let mut board = Board::new_empty();
        board.set_piece(Cell::new(2, 3), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(0, 1), PlayerColor::White, PieceType::Normal);
        board.set_piece(Cell::new(3, 4), PlayerColor::Black, PieceType::Normal);

        let result = search_with(2, 11).search(&mut board, PlayerColor::White);
        assert_eq!(result.score, -LOSS_SCORE);
        let best = result.best_move.expect("capture available");
        assert!(best.is_capture());
    }

    #[test]
    fn opening_search_leaves_board_intact() {
        let mut board = Board::new_game();
        let mut search = search_with(4, 17);
        let result = search.search(&mut board, PlayerColor::White);

        assert_eq!(board, Board::new_game());
        let best = result.best_move.expect("opening has moves");
        assert!(is_legal_move(&board, &best));
        assert!(result.stats.nodes > 7);
        assert!(!search.transposition_table().is_empty());
    }

    #[test]
    fn same_seed_same_choice() {
        let mut board = Board::new_game();
        let a = search_with(3, 99).search(&mut board, PlayerColor::Black);
        let b = search_with(3, 99).search(&mut board, PlayerColor::Black);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn reused_search_still_reports_a_move() {
        let mut board = Board::new_game();
        let mut search = search_with(3, 23);
        let first = search.search(&mut board, PlayerColor::White);
        let second = search.search(&mut board, PlayerColor::White);
        assert!(first.best_move.is_some());
        assert!(second.best_move.is_some());
        assert!(second.stats.tt.hits > 0);
    }

    #[test]
    fn zero_capacity_cache_still_searches() {
        let mut board = Board::new_game();
        let mut search = NegaScoutSearch::new(
            SearchConfig {
                max_depth: 3,
                tt_capacity: 0,
            },
            Some(1),
        );
        let result = search.search(&mut board, PlayerColor::White);
        assert!(result.best_move.is_some());
        assert!(search.transposition_table().is_empty());
        assert_eq!(search.transposition_table().capacity(), 0);
        assert!(result.stats.tt.skipped > 0);
    }
}
