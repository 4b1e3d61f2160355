//! Constants for board geometry, piece limits, and scoring.
//!
//! The board is the fixed 23-point graph of the morris variant; there is no
//! size configuration. Positions are numbered 0..=22 and the adjacency and
//! mill tables live in [`crate::topology`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of intersections on the board.
pub const POINTS: usize = 23;

// =============================================================================
// Piece Limits
// =============================================================================

/// Maximum number of pieces a side may own.
pub const MAX_PIECES: usize = 9;

/// A side with fewer pieces than this on the board has lost.
pub const MIN_PIECES: usize = 3;

/// A side with exactly this many pieces may fly to any empty point.
pub const FLYING_PIECES: usize = 3;

// =============================================================================
// Scoring
// =============================================================================

/// Score of a forced win for the maximizing side.
pub const WIN_SCORE: i32 = 10_000;

/// Score of a forced loss for the maximizing side.
pub const LOSS_SCORE: i32 = -10_000;

/// Weight of one piece of material in the movement-phase estimate.
/// Mobility only breaks ties, so this must exceed any mobility count.
pub const PIECE_WEIGHT: i32 = 1000;

// =============================================================================
// Search Defaults
// =============================================================================

/// Search depth (in plies) used by the batch driver when none is given.
pub const DEFAULT_DEPTH: u32 = 3;

/// Character for an empty point in board strings.
pub const EMPTY_CHAR: char = 'x';
