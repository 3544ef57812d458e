//! Cellular-automaton relaxation.
//!
//! Each pass looks at the 8 neighbours of every cell (cells outside the field
//! count as walls):
//!
//! - more than 4 walls: the cell becomes a wall
//! - fewer than 4 walls: the cell becomes empty
//! - exactly 4: the cell keeps its value
//!
//! Leaving the tie alone keeps the rule from oscillating. A pass reads the
//! whole previous field and writes a new one, so the result does not depend
//! on visiting order and the per-cell work can run in parallel.

use rayon::prelude::*;

use super::{BinaryField, EMPTY, WALL};
use crate::algo::Progress;

const NEIGHBOUR_THRESHOLD: u32 = 4;

/// Apply one relaxation pass and return the new field.
pub fn smooth_step(field: &BinaryField, parallel: bool) -> BinaryField {
    let (width, height) = (field.width(), field.height());
    let relax = |i: usize| {
        let (x, y) = (i % width, i / width);
        let walls = field.surrounding_wall_count(x, y);
        if walls > NEIGHBOUR_THRESHOLD {
            WALL
        } else if walls < NEIGHBOUR_THRESHOLD {
            EMPTY
        } else {
            field.get(x, y)
        }
    };

    let cells: Vec<u8> = if parallel {
        (0..width * height).into_par_iter().map(relax).collect()
    } else {
        (0..width * height).map(relax).collect()
    };

    BinaryField::from_cells(width, height, cells)
}

/// Apply `steps` relaxation passes.
pub fn smooth(field: &BinaryField, steps: usize, parallel: bool) -> BinaryField {
    smooth_with_progress(field, steps, parallel, &Progress::none())
}

/// Apply `steps` relaxation passes, reporting after each one.
pub fn smooth_with_progress(
    field: &BinaryField,
    steps: usize,
    parallel: bool,
    progress: &Progress,
) -> BinaryField {
    let mut current = field.clone();
    for step in 0..steps {
        current = smooth_step(&current, parallel);
        progress.report(step + 1, steps, "Smoothing");
    }
    current
}
