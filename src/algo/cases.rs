//! The marching-squares case table.
//!
//! Each configuration maps to the polygon covering the active part of the
//! square, listed in fan order. Every polygon is clockwise when seen from
//! above (+Y looking down, +X right, +Z up the page), which makes
//! `(p1 - p0) × (p2 - p0)` point to +Y for every fan triangle.
//!
//! ```text
//!   TL ---- T ---- TR
//!   |              |
//!   L              R
//!   |              |
//!   BL ---- B ---- BR
//! ```

use crate::grid::{Configuration, SquarePoint};

use SquarePoint::{
    Bottom as B, BottomLeft as BL, BottomRight as BR, Left as L, Right as R, Top as T,
    TopLeft as TL, TopRight as TR,
};

/// Polygon points for a configuration, in fan order.
///
/// Returns 0, 3, 4, 5 or 6 points.
pub fn case_points(configuration: Configuration) -> &'static [SquarePoint] {
    match configuration.index() {
        0 => &[],

        // one corner
        1 => &[L, B, BL],
        2 => &[BR, B, R],
        4 => &[TR, R, T],
        8 => &[TL, T, L],

        // two corners
        3 => &[R, BR, BL, L],
        6 => &[T, TR, BR, B],
        9 => &[TL, T, B, BL],
        12 => &[TL, TR, R, L],
        5 => &[T, TR, R, B, BL, L],
        10 => &[TL, T, R, BR, B, L],

        // three corners
        7 => &[T, TR, BR, BL, L],
        11 => &[TL, T, R, BR, BL],
        13 => &[TL, TR, R, B, BL],
        14 => &[TL, TR, BR, B, L],

        // all corners
        15 => &[TL, TR, BR, BL],

        i => unreachable!("marching squares configuration {} out of range", i),
    }
}
