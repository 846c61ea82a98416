//! Minimax game tree search with alpha-beta pruning
//!
//! The search is written from the machine's maximizing perspective: a won
//! position for the machine scores [`WIN_SCORE`], a lost one scores its
//! negation, and open positions at the depth limit fall back to the
//! heuristic. Hints for the human reuse the identical search with the
//! roles inverted rather than a separate code path.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Side};
use crate::heuristic::score_position;
use crate::outcome::{check_outcome, Outcome};

/// Score of a position the machine has won, far above anything the
/// heuristic can produce
pub const WIN_SCORE: i32 = 1_000_000;

/// Fixed depth used when searching for a hint on the human's behalf
pub const HINT_DEPTH: usize = 5;

/// The column chosen by a search and the minimax score backing it.
///
/// `column` is `None` when the position itself was evaluated as a leaf:
/// depth 0, a decided game, or a board with no open column.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// An agent that picks columns by bounded game tree search
pub struct Searcher {
    rng: SmallRng,

    /// The number of nodes searched by this `Searcher` so far (for
    /// diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            node_count: 0,
        }
    }

    /// Creates a `Searcher` with a fixed seed, making every tie-break
    /// reproducible
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    /// Picks the machine's strongest column, looking `depth` plies ahead
    pub fn best_move(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.search(board, depth, i32::MIN, i32::MAX, true)
    }

    /// Picks the column the human should play, by running the same search
    /// with the human treated as the side to optimize for
    pub fn hint(&mut self, board: &Board) -> SearchResult {
        self.search(board, HINT_DEPTH, i32::MIN, i32::MAX, false)
    }

    /// Performs game tree search to `depth` plies.
    ///
    /// When `maximizing` the machine is to move and the greatest score
    /// wins; otherwise the human is to move and the least score wins.
    /// Scores are always from the machine's point of view, whoever moves.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let open = board.open_columns();
        let outcome = check_outcome(board);

        if depth == 0 || outcome.is_some() || open.is_empty() {
            let score = match outcome {
                Some(Outcome::Win {
                    side: Side::Machine,
                    ..
                }) => WIN_SCORE,
                Some(Outcome::Win {
                    side: Side::Human, ..
                }) => -WIN_SCORE,
                Some(Outcome::Draw) => 0,
                None => score_position(board, Side::Machine),
            };
            return SearchResult {
                column: None,
                score,
            };
        }

        // examine a randomly picked column first: a ply where every branch
        // scores equally then settles on it instead of always column 0
        let mut order = open;
        let pick = self.rng.gen_range(0..order.len());
        order.swap(0, pick);

        let mover = if maximizing {
            Side::Machine
        } else {
            Side::Human
        };

        let mut best_column = order[0];
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for &column in order.iter() {
            let mut next = *board;
            // columns in `order` are open, the drop cannot fail
            next.drop_piece(column, mover).unwrap();

            let score = self
                .search(&next, depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(best_score);
            }

            // neither side will steer the game into this subtree
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: best_score,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
