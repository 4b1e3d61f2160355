//! Static board topology: adjacency and mill lines.
//!
//! Both tables are literal data describing the physical board. Every point
//! lists its neighbors in increasing order, and every mill line through a
//! point is stored at that point as the pair of the *other* two members, so
//! a line `(i, j, k)` appears once at each of `i`, `j` and `k`.
//!
//! Points 0..=7 form the bottom rows, 8..=13 the middle row (left and right
//! halves), and 14..=22 the top rows. The corner lines `0-3-6` and `2-5-7`
//! run diagonally.

use crate::constants::POINTS;

/// A point on the board, an index in `0..POINTS`.
pub type Point = usize;

/// Directly connected points of each point.
pub const NEIGHBORS: [&[Point]; POINTS] = [
    &[1, 3, 8],         // 0
    &[0, 2, 4],         // 1
    &[1, 5, 13],        // 2
    &[0, 4, 6, 9],      // 3
    &[1, 3, 5],         // 4
    &[2, 4, 7, 12],     // 5
    &[3, 7, 10],        // 6
    &[5, 6, 11],        // 7
    &[0, 9, 20],        // 8
    &[3, 8, 10, 17],    // 9
    &[6, 9, 14],        // 10
    &[7, 12, 16],       // 11
    &[5, 11, 13, 19],   // 12
    &[2, 12, 22],       // 13
    &[10, 15, 17],      // 14
    &[14, 16, 18],      // 15
    &[11, 15, 19],      // 16
    &[9, 14, 18, 20],   // 17
    &[15, 17, 19, 21],  // 18
    &[12, 16, 18, 22],  // 19
    &[8, 17, 21],       // 20
    &[18, 20, 22],      // 21
    &[13, 19, 21],      // 22
];

/// For each point, the other two members of every mill line through it.
pub const MILLS: [&[[Point; 2]]; POINTS] = [
    &[[1, 2], [3, 6], [8, 20]],      // 0
    &[[0, 2]],                       // 1
    &[[0, 1], [5, 7], [13, 22]],     // 2
    &[[0, 6], [4, 5], [9, 17]],      // 3
    &[[3, 5]],                       // 4
    &[[2, 7], [3, 4], [12, 19]],     // 5
    &[[0, 3], [10, 14]],             // 6
    &[[2, 5], [11, 16]],             // 7
    &[[0, 20], [9, 10]],             // 8
    &[[3, 17], [8, 10]],             // 9
    &[[6, 14], [8, 9]],              // 10
    &[[7, 16], [12, 13]],            // 11
    &[[5, 19], [11, 13]],            // 12
    &[[2, 22], [11, 12]],            // 13
    &[[6, 10], [15, 16], [17, 20]],  // 14
    &[[14, 16], [18, 21]],           // 15
    &[[7, 11], [14, 15], [19, 22]],  // 16
    &[[3, 9], [14, 20], [18, 19]],   // 17
    &[[15, 21], [17, 19]],           // 18
    &[[5, 12], [16, 22], [17, 18]],  // 19
    &[[0, 8], [14, 17], [21, 22]],   // 20
    &[[15, 18], [20, 22]],           // 21
    &[[2, 13], [16, 19], [20, 21]],  // 22
];

/// Neighbors of a point, in increasing order.
#[inline]
pub fn neighbors(pt: Point) -> &'static [Point] {
    NEIGHBORS[pt]
}

/// Mill lines through a point, each given as the other two members.
#[inline]
pub fn mills(pt: Point) -> &'static [[Point; 2]] {
    MILLS[pt]
}

/// Every distinct mill line on the board, as sorted triples.
pub fn mill_lines() -> Vec<[Point; 3]> {
    let mut lines: Vec<[Point; 3]> = Vec::new();
    for pt in 0..POINTS {
        for &[a, b] in mills(pt) {
            let mut line = [pt, a, b];
            line.sort_unstable();
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
    }
    lines
}
