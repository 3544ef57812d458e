//! Random fill followed by cellular-automaton smoothing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::automaton::smooth;
use super::seed::Seed;
use super::{BinaryField, EMPTY, WALL};
use crate::error::{CaveError, Result};

/// Options for [`generate_field`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    /// Number of columns (must be greater than 1).
    pub width: usize,

    /// Number of rows (must be greater than 1).
    pub height: usize,

    /// Chance, in percent, that an interior cell starts as a wall (0 to 100).
    pub fill_percent: i32,

    /// Number of cellular-automaton passes.
    pub smoothing_steps: usize,

    /// Seed of the random fill.
    pub seed: Seed,

    /// Whether to run smoothing passes in parallel (default: true).
    pub parallel: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            fill_percent: 47,
            smoothing_steps: 5,
            seed: Seed::default(),
            parallel: true,
        }
    }
}

impl FieldOptions {
    /// Create options for a `width` × `height` field with default settings.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the fill percentage.
    pub fn with_fill_percent(mut self, fill_percent: i32) -> Self {
        self.fill_percent = fill_percent;
        self
    }

    /// Set the number of smoothing passes.
    pub fn with_smoothing_steps(mut self, steps: usize) -> Self {
        self.smoothing_steps = steps;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check dimensions and fill percentage.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 1 {
            return Err(CaveError::invalid_param(
                "width",
                self.width,
                "must be greater than 1",
            ));
        }
        if self.height <= 1 {
            return Err(CaveError::invalid_param(
                "height",
                self.height,
                "must be greater than 1",
            ));
        }
        if !(0..=100).contains(&self.fill_percent) {
            return Err(CaveError::invalid_param(
                "fill_percent",
                self.fill_percent,
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

/// Generate a smoothed binary field.
///
/// Validates the options, resolves the seed and runs [`generate_seeded`].
pub fn generate_field(options: &FieldOptions) -> Result<BinaryField> {
    options.validate()?;
    let seed = options.seed.resolve();
    Ok(generate_seeded(
        options.width,
        options.height,
        options.fill_percent,
        options.smoothing_steps,
        seed,
        options.parallel,
    ))
}

/// Generate a smoothed binary field from an already resolved seed.
///
/// The result depends only on the arguments other than `parallel`.
pub fn generate_seeded(
    width: usize,
    height: usize,
    fill_percent: i32,
    smoothing_steps: usize,
    seed: u64,
    parallel: bool,
) -> BinaryField {
    let filled = random_fill(width, height, fill_percent, seed);
    smooth(&filled, smoothing_steps, parallel)
}

/// Fill a field at random, with a solid border.
///
/// Cells are visited column by column (`x` outer, `y` inner). Border cells
/// become walls without consuming a random draw; every other cell draws an
/// integer in `0..100` and is a wall when the draw is below `fill_percent`.
pub fn random_fill(width: usize, height: usize, fill_percent: i32, seed: u64) -> BinaryField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = vec![EMPTY; width * height];

    for x in 0..width {
        for y in 0..height {
            let is_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
            if is_border || rng.random_range(0..100) < fill_percent {
                cells[y * width + x] = WALL;
            }
        }
    }

    BinaryField::from_cells(width, height, cells)
}
