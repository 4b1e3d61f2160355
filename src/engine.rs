//! Engine entry point: terminal checks and perspective normalization.
//!
//! The search always maximizes for white. To answer for black, the engine
//! flips the board's colors, searches, and flips the chosen board back. The
//! reported score stays in the searching side's frame.
//!
//! ## Example
//!
//! ```
//! use morris_rust::board::{Board, Side};
//! use morris_rust::engine::{Engine, EngineConfig, Outcome};
//! use morris_rust::movegen::Phase;
//! use morris_rust::search::Algorithm;
//!
//! let board: Board = "wxxxxxxxxxxxxxxxxxxxxxb".parse().unwrap();
//! let config = EngineConfig::new(Algorithm::AlphaBeta, Phase::Placement, Side::White, 2);
//! let engine = Engine::new(config).unwrap();
//! if let Outcome::Move(result) = engine.run(&board) {
//!     println!("{} ({})", result.board, result.score);
//! }
//! ```

use tracing::{debug, info};

use crate::board::{Board, Side};
use crate::constants::MIN_PIECES;
use crate::error::{EngineError, EngineResult};
use crate::movegen::{Phase, Rules, mobility};
use crate::search::{Algorithm, SearchResult, Searcher};

/// Everything that selects one engine variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub phase: Phase,
    /// Side the engine plays for
    pub side: Side,
    /// Search depth in plies
    pub depth: u32,
    pub rules: Rules,
}

impl EngineConfig {
    pub fn new(algorithm: Algorithm, phase: Phase, side: Side, depth: u32) -> Self {
        Self {
            algorithm,
            phase,
            side,
            depth,
            rules: Rules::default(),
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Short name such as `alpha-beta/movement/black`.
    pub fn name(&self) -> String {
        let algorithm = match self.algorithm {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        };
        let phase = match self.phase {
            Phase::Placement => "placement",
            Phase::Movement => "movement",
        };
        format!("{algorithm}/{phase}/{}", self.side)
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A move was searched; the board is in the caller's colors
    Move(SearchResult),
    /// The position is already won for the engine's side
    AlreadyWon,
    /// The position is already lost for the engine's side
    AlreadyLost,
}

/// A validated engine variant.
#[derive(Copy, Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine, rejecting a zero depth.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        if config.depth < 1 {
            return Err(EngineError::InvalidDepth(config.depth.to_string()));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `board` for the configured side.
    pub fn run(&self, board: &Board) -> Outcome {
        let cfg = &self.config;
        let normalized = to_white_frame(board, cfg.side);

        if cfg.phase == Phase::Movement {
            if let Some(outcome) = terminal_check(&normalized, cfg.rules) {
                info!(engine = %cfg.name(), board = %board, ?outcome, "terminal position");
                return outcome;
            }
        }

        let result =
            Searcher::new(cfg.algorithm, cfg.phase, cfg.rules, cfg.depth).search(&normalized);
        debug!(
            engine = %cfg.name(),
            depth = cfg.depth,
            evaluated = result.evaluated,
            score = result.score,
            "search finished"
        );

        Outcome::Move(SearchResult {
            board: to_white_frame(&result.board, cfg.side),
            ..result
        })
    }
}

/// Relabel `board` so that `side` plays white. Flipping is its own inverse,
/// so the same call maps results back.
pub fn to_white_frame(board: &Board, side: Side) -> Board {
    match side {
        Side::White => *board,
        Side::Black => board.flipped(),
    }
}

/// Detect a decided movement-phase position, with white to move.
///
/// Checked in order: black below three pieces, white below three pieces,
/// black without moves, white without moves.
pub fn terminal_check(board: &Board, rules: Rules) -> Option<Outcome> {
    if board.count(Side::Black) < MIN_PIECES {
        Some(Outcome::AlreadyWon)
    } else if board.count(Side::White) < MIN_PIECES {
        Some(Outcome::AlreadyLost)
    } else if mobility(board, Side::Black, rules) == 0 {
        Some(Outcome::AlreadyWon)
    } else if mobility(board, Side::White, rules) == 0 {
        Some(Outcome::AlreadyLost)
    } else {
        None
    }
}

/// The eight engine variants for one depth, in batch order.
pub fn all_variants(depth: u32, rules: Rules) -> Vec<EngineConfig> {
    let mut out = Vec::with_capacity(8);
    for side in [Side::White, Side::Black] {
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            for phase in [Phase::Placement, Phase::Movement] {
                out.push(EngineConfig::new(algorithm, phase, side, depth).with_rules(rules));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn engine(algorithm: Algorithm, phase: Phase, side: Side, depth: u32) -> Engine {
        Engine::new(EngineConfig::new(algorithm, phase, side, depth)).unwrap()
    }

    #[test]
    fn test_zero_depth_rejected() {
        let cfg = EngineConfig::new(Algorithm::Minimax, Phase::Placement, Side::White, 0);
        assert_eq!(
            Engine::new(cfg).unwrap_err(),
            EngineError::InvalidDepth("0".to_string())
        );
    }

    #[test]
    fn test_terminal_check_order() {
        // Both sides below three: black's count is checked first.
        let b = board("wwxxxxxxxxxxxxxxxxxxxbb");
        assert_eq!(terminal_check(&b, Rules::default()), Some(Outcome::AlreadyWon));
        let b = board("wwxxxxxxxxxxxxxxxxxxbbb");
        assert_eq!(terminal_check(&b, Rules::default()), Some(Outcome::AlreadyLost));
    }

    #[test]
    fn test_terminal_check_blocked() {
        // White boxed in on 0, 1, 2, 4.
        let b = board("wwwbwbxxbxxxxbxxxxxxxxx");
        assert_eq!(terminal_check(&b, Rules::default()), Some(Outcome::AlreadyLost));
        assert_eq!(terminal_check(&b.flipped(), Rules::default()), Some(Outcome::AlreadyWon));
    }

    #[test]
    fn test_placement_skips_terminal_check() {
        let b = board("wwwxxxxxxxxxxxxxxxxxxxx");
        let out = engine(Algorithm::Minimax, Phase::Placement, Side::White, 1).run(&b);
        assert!(matches!(out, Outcome::Move(_)));
    }

    #[test]
    fn test_black_result_is_in_caller_colors() {
        let b = board("wxxxxxxxxxxxxxxxxxxxxxb");
        let Outcome::Move(r) = engine(Algorithm::Minimax, Phase::Placement, Side::Black, 1).run(&b)
        else {
            panic!("expected a move");
        };
        assert_eq!(r.board.count(Side::Black), 2);
        assert_eq!(r.board.count(Side::White), 1);
        assert_eq!(r.board.get(1), Some(Side::Black));
        assert_eq!(r.score, 1);
    }

    #[test]
    fn test_all_variants() {
        let variants = all_variants(3, Rules::default());
        assert_eq!(variants.len(), 8);
        let names: Vec<String> = variants.iter().map(EngineConfig::name).collect();
        assert_eq!(
            names,
            [
                "minimax/placement/white",
                "minimax/movement/white",
                "alpha-beta/placement/white",
                "alpha-beta/movement/white",
                "minimax/placement/black",
                "minimax/movement/black",
                "alpha-beta/placement/black",
                "alpha-beta/movement/black",
            ]
        );
        assert!(variants.iter().all(|v| v.depth == 3));
    }
}
