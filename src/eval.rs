//! Static position estimates.
//!
//! Scores are always from white's point of view: the engine normalizes the
//! board so that the side it searches for plays white.

use crate::board::{Board, Side};
use crate::constants::{LOSS_SCORE, MIN_PIECES, PIECE_WEIGHT, WIN_SCORE};
use crate::movegen::{Phase, Rules, mobility};

/// Static estimate of `board` for the given phase.
pub fn evaluate(board: &Board, phase: Phase, rules: Rules) -> i32 {
    match phase {
        Phase::Placement => placement_estimate(board),
        Phase::Movement => movement_estimate(board, rules),
    }
}

/// Material difference, white minus black.
pub fn placement_estimate(board: &Board) -> i32 {
    material(board)
}

/// Material dominates; black's mobility breaks ties.
///
/// Only black's mobility is measured. A black side with no moves is
/// treated as lost.
pub fn movement_estimate(board: &Board, rules: Rules) -> i32 {
    if board.count(Side::Black) < MIN_PIECES {
        return WIN_SCORE;
    }
    if board.count(Side::White) < MIN_PIECES {
        return LOSS_SCORE;
    }
    let black_moves = mobility(board, Side::Black, rules) as i32;
    if black_moves == 0 {
        return WIN_SCORE;
    }
    PIECE_WEIGHT * material(board) - black_moves
}

fn material(board: &Board) -> i32 {
    board.count(Side::White) as i32 - board.count(Side::Black) as i32
}
