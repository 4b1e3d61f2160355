//! Phase-aware legal move generation.
//!
//! Moves are represented by the board they produce. Each generated board is a
//! copy of the input with exactly one ply applied:
//! - Placement: one empty point filled by the mover
//! - Movement: one mover piece relocated to an adjacent empty point, or to
//!   any empty point when the mover is down to three pieces ("flying")
//!
//! A ply that closes a mill additionally removes one opponent piece, and one
//! board is produced per eligible capture target.
//!
//! Output order is deterministic: source points ascending, then destinations
//! ascending, then capture targets ascending.

use crate::board::{Board, Side};
use crate::constants::{FLYING_PIECES, MIN_PIECES};
use crate::topology::{Point, neighbors};

/// Stage of the game for the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Phase {
    /// Pieces are placed onto empty points
    #[value(alias = "opening")]
    Placement,
    /// Pieces slide (or fly) between points
    #[value(alias = "game")]
    Movement,
}

/// Whose piece count gates movement-phase generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PieceGuard {
    /// The mover's own count (a side below three pieces cannot move)
    #[default]
    Mover,
    /// White's count regardless of who moves, as the legacy tool did
    White,
}

/// Rule variations understood by the generator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub guard: PieceGuard,
}

impl Rules {
    fn guarded_side(&self, mover: Side) -> Side {
        match self.guard {
            PieceGuard::Mover => mover,
            PieceGuard::White => Side::White,
        }
    }
}

/// Generate every board reachable by one legal ply of `mover`.
pub fn legal_moves(board: &Board, mover: Side, phase: Phase, rules: Rules) -> Vec<Board> {
    let mut out = Vec::new();
    match phase {
        Phase::Placement => gen_placements(board, mover, &mut out),
        Phase::Movement => gen_movements(board, mover, rules, &mut out),
    }
    out
}

/// Number of legal movement-phase plies for `mover`.
pub fn mobility(board: &Board, mover: Side, rules: Rules) -> usize {
    legal_moves(board, mover, Phase::Movement, rules).len()
}

fn gen_placements(board: &Board, mover: Side, out: &mut Vec<Board>) {
    for pt in board.empty_points() {
        let mut next = *board;
        next.place(pt, mover);
        push_with_captures(next, pt, mover, out);
    }
}

fn gen_movements(board: &Board, mover: Side, rules: Rules, out: &mut Vec<Board>) {
    if board.count(rules.guarded_side(mover)) < MIN_PIECES {
        return;
    }

    let flying = board.count(mover) == FLYING_PIECES;
    let empties: Vec<Point> = board.empty_points().collect();

    for from in board.points_of(mover) {
        let targets: Vec<Point> = if flying {
            empties.clone()
        } else {
            neighbors(from)
                .iter()
                .copied()
                .filter(|&n| board.is_empty(n))
                .collect()
        };

        for to in targets {
            let mut next = *board;
            next.clear(from);
            next.place(to, mover);
            push_with_captures(next, to, mover, out);
        }
    }
}

/// Push `next`, or one board per legal capture if the piece that just landed
/// on `landed` closed a mill.
fn push_with_captures(next: Board, landed: Point, mover: Side, out: &mut Vec<Board>) {
    if !next.is_closed_mill(landed) {
        out.push(next);
        return;
    }

    let targets = capture_targets(&next, mover.opponent());
    if targets.is_empty() {
        // Opponent has no pieces left.
        out.push(next);
        return;
    }
    for pt in targets {
        let mut captured = next;
        captured.clear(pt);
        out.push(captured);
    }
}

/// Opponent pieces that may be removed after a mill closes.
///
/// Pieces inside closed mills are protected unless every opponent piece is in
/// one, in which case all of them are eligible.
pub fn capture_targets(board: &Board, opponent: Side) -> Vec<Point> {
    let pieces: Vec<Point> = board.points_of(opponent).collect();
    let exposed: Vec<Point> = pieces
        .iter()
        .copied()
        .filter(|&pt| !board.is_closed_mill(pt))
        .collect();
    if exposed.is_empty() { pieces } else { exposed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_placement_on_empty_board() {
        let moves = legal_moves(&Board::new(), Side::White, Phase::Placement, Rules::default());
        assert_eq!(moves.len(), 23);
        // Ordered by destination.
        assert_eq!(moves[0].get(0), Some(Side::White));
        assert_eq!(moves[22].get(22), Some(Side::White));
    }

    #[test]
    fn test_capture_targets_skip_protected() {
        // Black mill on 3-4-5 plus loose pieces on 10 and 15.
        let b = board("xxxbbbxxxxbxxxxbxxxxxxx");
        assert_eq!(capture_targets(&b, Side::Black), vec![10, 15]);
    }

    #[test]
    fn test_capture_targets_all_protected() {
        let b = board("xxxbbbxxxxxxxxxxxxxxxxx");
        assert_eq!(capture_targets(&b, Side::Black), vec![3, 4, 5]);
    }

    #[test]
    fn test_mill_without_opponent_pieces() {
        // White closes 0-1-2 with no black piece on the board.
        let b = board("wwxxxxxxxxxxxxxxxxxxxxx");
        let moves = legal_moves(&b, Side::White, Phase::Placement, Rules::default());
        assert_eq!(moves.len(), 21);
        assert!(moves.iter().any(|m| m.is_closed_mill(2)));
    }

    #[test]
    fn test_sliding_uses_neighbors() {
        // White on 0, 1, 2, 3 cannot reach beyond adjacent empties.
        let b = board("wwwwxxxxxxxxxxxxxxxbbbx");
        let moves = legal_moves(&b, Side::White, Phase::Movement, Rules::default());
        // 0 -> 8; 1 -> 4; 2 -> 5, 13; 3 -> 4, 6, 9
        assert_eq!(moves.len(), 7);
        for m in &moves {
            assert_eq!(m.count(Side::White), 4);
            assert_eq!(m.count(Side::Black), 3);
        }
    }

    #[test]
    fn test_movement_guard() {
        // White has only two pieces; black has five.
        let b = board("wwxxxxxxxxxxxxxxxxbbbbb");
        let mover = legal_moves(&b, Side::Black, Phase::Movement, Rules::default());
        assert!(!mover.is_empty());

        let legacy = Rules {
            guard: PieceGuard::White,
        };
        assert!(legal_moves(&b, Side::Black, Phase::Movement, legacy).is_empty());
        assert!(legal_moves(&b, Side::White, Phase::Movement, Rules::default()).is_empty());
    }

    #[test]
    fn test_mobility_matches_move_count() {
        let b = board("wwwwxxxxxxxxxxxxxxxbbbx");
        assert_eq!(
            mobility(&b, Side::Black, Rules::default()),
            legal_moves(&b, Side::Black, Phase::Movement, Rules::default()).len()
        );
    }
}
