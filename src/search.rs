//! Depth-limited game-tree search: full minimax and alpha-beta.
//!
//! Both strategies share one recursive routine. White is always the
//! maximizing side; the engine relabels the board beforehand when searching
//! for black. Each node works on its own board copy and only the root keeps
//! track of the board it selected.
//!
//! Ties keep the first child found, so results are deterministic given the
//! generator's ordering.

use crate::board::{Board, Side};
use crate::constants::MIN_PIECES;
use crate::eval::evaluate;
use crate::movegen::{Phase, Rules, legal_moves};

/// Search strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Explore every child of every node
    Minimax,
    /// Skip siblings once the window closes
    #[value(alias = "ab")]
    AlphaBeta,
}

impl Algorithm {
    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Minimax => "MINIMAX",
            Algorithm::AlphaBeta => "ALPHA-BETA",
        }
    }
}

/// Result of searching one root position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Board selected at the root
    pub board: Board,
    /// Backed-up score of the root
    pub score: i32,
    /// Number of positions scored by the static estimate
    pub evaluated: u64,
}

/// A single search over a fixed phase, algorithm and depth.
pub struct Searcher {
    algorithm: Algorithm,
    phase: Phase,
    rules: Rules,
    max_depth: u32,
    evaluated: u64,
}

impl Searcher {
    pub fn new(algorithm: Algorithm, phase: Phase, rules: Rules, max_depth: u32) -> Self {
        Self {
            algorithm,
            phase,
            rules,
            max_depth,
            evaluated: 0,
        }
    }

    /// Search from `root` with white to move.
    ///
    /// If the root has no legal move, the root board itself is returned with
    /// its static estimate.
    pub fn search(mut self, root: &Board) -> SearchResult {
        let (score, best) = self.visit(root, 0, Side::White, i32::MIN, i32::MAX);
        SearchResult {
            board: best.unwrap_or(*root),
            score,
            evaluated: self.evaluated,
        }
    }

    /// Backed-up score of `board` with `mover` to play.
    pub fn score(mut self, board: &Board, mover: Side) -> i32 {
        self.visit(board, 0, mover, i32::MIN, i32::MAX).0
    }

    fn visit(
        &mut self,
        board: &Board,
        depth: u32,
        mover: Side,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Board>) {
        if self.is_frontier(board, depth) {
            return (self.estimate(board), None);
        }

        let children = legal_moves(board, mover, self.phase, self.rules);
        if children.is_empty() {
            return (self.estimate(board), None);
        }

        let maximizing = mover == Side::White;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best = None;

        for child in children {
            let (score, _) = self.visit(&child, depth + 1, mover.opponent(), alpha, beta);
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best = Some(child);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best = Some(child);
                }
                beta = beta.min(best_score);
            }

            if self.algorithm == Algorithm::AlphaBeta && alpha >= beta {
                break;
            }
        }

        (best_score, best)
    }

    fn is_frontier(&self, board: &Board, depth: u32) -> bool {
        if depth >= self.max_depth {
            return true;
        }
        self.phase == Phase::Movement
            && (board.count(Side::White) < MIN_PIECES || board.count(Side::Black) < MIN_PIECES)
    }

    fn estimate(&mut self, board: &Board) -> i32 {
        self.evaluated += 1;
        evaluate(board, self.phase, self.rules)
    }
}

/// Convenience wrapper: search `root` with white to move.
pub fn search(
    root: &Board,
    algorithm: Algorithm,
    phase: Phase,
    rules: Rules,
    depth: u32,
) -> SearchResult {
    Searcher::new(algorithm, phase, rules, depth).search(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WIN_SCORE;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_depth_one_placement_counts_leaves() {
        let b = board("wxxxxxxxxxxxxxxxxxxxxxb");
        let r = search(&b, Algorithm::Minimax, Phase::Placement, Rules::default(), 1);
        // One leaf per empty point, each worth +1.
        assert_eq!(r.evaluated, 21);
        assert_eq!(r.score, 1);
        assert_eq!(r.board.get(1), Some(Side::White), "first placement wins ties");
    }

    #[test]
    fn test_placement_prefers_capture() {
        // White on 0, 1 can close 0-1-2 and take black's 15.
        let b = board("wwxxxxxxxxxxxxxbxxxxxxx");
        let r = search(&b, Algorithm::Minimax, Phase::Placement, Rules::default(), 1);
        assert_eq!(r.score, 3);
        assert_eq!(r.board.get(2), Some(Side::White));
        assert_eq!(r.board.get(15), None);
    }

    #[test]
    fn test_movement_finds_winning_capture() {
        // White on 0, 1, 5 flies 5 -> 2, closing 0-1-2 and leaving black
        // with two pieces.
        let b = board("wwxxxwxxxxxxxxxbxxxxxbb");
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let r = search(&b, algorithm, Phase::Movement, Rules::default(), 2);
            assert_eq!(r.score, WIN_SCORE, "{algorithm:?}");
            assert_eq!(r.board.count(Side::Black), 2);
        }
    }

    #[test]
    fn test_alpha_beta_prunes() {
        let b = board("wxbxwxxbxxxwxxbxxxxxxxx");
        let mm = search(&b, Algorithm::Minimax, Phase::Placement, Rules::default(), 3);
        let ab = search(&b, Algorithm::AlphaBeta, Phase::Placement, Rules::default(), 3);
        assert_eq!(mm.score, ab.score);
        assert!(ab.evaluated < mm.evaluated);
    }

    #[test]
    fn test_no_moves_returns_root() {
        // White on 0, 1, 2, 4 is boxed in by black on 3, 5, 8, 13.
        let b = board("wwwbwbxxbxxxxbxxxxxxxxx");
        let r = search(&b, Algorithm::Minimax, Phase::Movement, Rules::default(), 2);
        assert_eq!(r.board, b);
        assert_eq!(r.evaluated, 1);
    }
}
