//! Board state and the mill detector.
//!
//! A [`Board`] is a small `Copy` value: exploring a move always works on a
//! fresh copy, so sibling branches of the search never share cells.

use std::fmt;
use std::str::FromStr;

use crate::constants::{EMPTY_CHAR, MAX_PIECES, POINTS};
use crate::error::BoardDefect;
use crate::topology::{Point, mills};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Lowercase board character of this side.
    pub fn symbol(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    fn from_symbol(c: char) -> Option<Side> {
        match c {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// The 23 cells of the board, each empty or owned by one side.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Side>; POINTS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, pt: Point) -> Option<Side> {
        self.cells[pt]
    }

    #[inline]
    pub fn is_empty(&self, pt: Point) -> bool {
        self.cells[pt].is_none()
    }

    #[inline]
    pub fn place(&mut self, pt: Point, side: Side) {
        self.cells[pt] = Some(side);
    }

    #[inline]
    pub fn clear(&mut self, pt: Point) {
        self.cells[pt] = None;
    }

    /// Number of pieces `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&c| c == Some(side)).count()
    }

    /// Points occupied by `side`, in increasing order.
    pub fn points_of(&self, side: Side) -> impl Iterator<Item = Point> + '_ {
        (0..POINTS).filter(move |&pt| self.cells[pt] == Some(side))
    }

    /// Empty points, in increasing order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..POINTS).filter(move |&pt| self.cells[pt].is_none())
    }

    /// Check whether the piece at `pt` is part of a closed mill.
    ///
    /// Returns false for an empty point. Otherwise true iff, for at least one
    /// mill line through `pt`, both other members hold the same side.
    pub fn is_closed_mill(&self, pt: Point) -> bool {
        let Some(side) = self.cells[pt] else {
            return false;
        };
        mills(pt)
            .iter()
            .any(|&[a, b]| self.cells[a] == Some(side) && self.cells[b] == Some(side))
    }

    /// The same board with white and black swapped.
    pub fn flipped(&self) -> Board {
        let mut out = *self;
        for c in &mut out.cells {
            *c = c.map(Side::opponent);
        }
        out
    }

    /// A board with `white` and `black` pieces on distinct random points.
    ///
    /// Counts are clamped so that both sides fit on the board and neither
    /// exceeds [`MAX_PIECES`].
    pub fn random(rng: &mut fastrand::Rng, white: usize, black: usize) -> Board {
        let white = white.min(MAX_PIECES);
        let black = black.min(MAX_PIECES).min(POINTS - white);
        let mut points: Vec<Point> = (0..POINTS).collect();
        rng.shuffle(&mut points);

        let mut board = Board::new();
        for &pt in &points[..white] {
            board.place(pt, Side::White);
        }
        for &pt in &points[white..white + black] {
            board.place(pt, Side::Black);
        }
        board
    }
}

impl FromStr for Board {
    type Err = BoardDefect;

    /// Parse a 23-character board string over `{w, b, x}`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != POINTS {
            return Err(BoardDefect::Length(len));
        }

        let mut board = Board::new();
        for (index, ch) in s.chars().enumerate() {
            let c = ch.to_ascii_lowercase();
            if c == EMPTY_CHAR {
                continue;
            }
            match Side::from_symbol(c) {
                Some(side) => board.place(index, side),
                None => return Err(BoardDefect::Character { index, found: ch }),
            }
        }

        for side in [Side::White, Side::Black] {
            let count = board.count(side);
            if count > MAX_PIECES {
                return Err(BoardDefect::TooManyPieces { side, count });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Uppercase board string, e.g. `WWBXXXXXXXXXXXXXXXXXXXX`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            let ch = match c {
                Some(side) => side.symbol(),
                None => EMPTY_CHAR,
            };
            write!(f, "{}", ch.to_ascii_uppercase())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}
