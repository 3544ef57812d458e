//! The end-to-end generation pipeline.
//!
//! [`generate`] runs every stage in order:
//!
//! 1. random fill from the resolved [`Seed`]
//! 2. cellular-automaton smoothing
//! 3. shared-node grid construction
//! 4. marching-squares triangulation of the floor
//! 5. outline tracing and wall extrusion
//!
//! The whole [`Cave`] is built before it is returned, so a caller never
//! observes a partially generated result.

use nalgebra::Point3;

use crate::algo::extrude::extrude_walls;
use crate::algo::outline::{extract_outlines, Outline};
use crate::algo::triangulate::triangulate_with_progress;
use crate::algo::Progress;
use crate::error::{CaveError, Result};
use crate::field::{random_fill, smooth_with_progress, BinaryField, FieldOptions, Seed};
use crate::grid::SquareGrid;
use crate::mesh::Mesh;

const STAGES: usize = 5;

/// Options for [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaveConfig {
    /// Number of field columns (must be greater than 1).
    pub width: usize,

    /// Number of field rows (must be greater than 1).
    pub height: usize,

    /// Chance, in percent, that an interior cell starts as a wall (0 to 100).
    pub fill_percent: i32,

    /// Number of smoothing passes (default: 5).
    pub smoothing_steps: usize,

    /// Seed of the random fill.
    pub seed: Seed,

    /// Side length of a grid square in world units (default: 1.0).
    pub cell_size: f64,

    /// Height of the extruded walls (default: 5.0). Zero gives flat walls.
    pub wall_height: f64,

    /// Whether smoothing passes run in parallel (default: true).
    pub parallel: bool,
}

impl Default for CaveConfig {
    fn default() -> Self {
        let field = FieldOptions::default();
        Self {
            width: field.width,
            height: field.height,
            fill_percent: field.fill_percent,
            smoothing_steps: field.smoothing_steps,
            seed: field.seed,
            cell_size: 1.0,
            wall_height: 5.0,
            parallel: field.parallel,
        }
    }
}

impl CaveConfig {
    /// Create a configuration for a `width` × `height` field with default
    /// settings.
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

    /// Set the square size.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the wall height.
    pub fn with_wall_height(mut self, wall_height: f64) -> Self {
        self.wall_height = wall_height;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The field-generation subset of this configuration.
    pub fn field_options(&self) -> FieldOptions {
        FieldOptions {
            width: self.width,
            height: self.height,
            fill_percent: self.fill_percent,
            smoothing_steps: self.smoothing_steps,
            seed: self.seed.clone(),
            parallel: self.parallel,
        }
    }

    /// Check every parameter.
    pub fn validate(&self) -> Result<()> {
        self.field_options().validate()?;
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(CaveError::invalid_param(
                "cell_size",
                self.cell_size,
                "must be a positive finite number",
            ));
        }
        if !(self.wall_height.is_finite() && self.wall_height >= 0.0) {
            return Err(CaveError::invalid_param(
                "wall_height",
                self.wall_height,
                "must be a finite number no less than 0",
            ));
        }
        Ok(())
    }
}

/// A generated cave: the field, the floor and wall meshes, and the outlines
/// the walls were raised along.
#[derive(Debug, Clone)]
pub struct Cave {
    seed: u64,
    field: BinaryField,
    floor: Mesh,
    outlines: Vec<Outline>,
    walls: Mesh,
}

impl Cave {
    /// The resolved seed. Feeding it back as [`Seed::Value`] reproduces the
    /// cave, even when it was generated from [`Seed::Random`].
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The smoothed field.
    #[inline]
    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    /// The floor mesh, facing +Y at `y = 0`.
    #[inline]
    pub fn floor(&self) -> &Mesh {
        &self.floor
    }

    /// Boundary loops of the floor, as indices into the floor's vertices.
    #[inline]
    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    /// The wall mesh, hanging below the outlines.
    #[inline]
    pub fn walls(&self) -> &Mesh {
        &self.walls
    }

    /// Positions of an outline's vertices.
    pub fn outline_positions(&self, outline: &Outline) -> Vec<Point3<f64>> {
        outline
            .vertices()
            .iter()
            .map(|&v| *self.floor.position(v))
            .collect()
    }

    /// Split into `(floor, walls)`.
    pub fn into_meshes(self) -> (Mesh, Mesh) {
        (self.floor, self.walls)
    }
}

/// Generate a cave.
///
/// # Example
///
/// ```
/// use grotto::{generate, CaveConfig};
/// use grotto::field::Seed;
///
/// let config = CaveConfig::new(48, 32)
///     .with_seed(Seed::text("lantern"))
///     .with_wall_height(3.0);
/// let cave = generate(&config).unwrap();
///
/// assert!(cave.field().has_solid_border());
/// assert!(!cave.floor().is_empty());
/// ```
pub fn generate(config: &CaveConfig) -> Result<Cave> {
    generate_with_progress(config, &Progress::none())
}

/// Generate a cave, reporting each stage to `progress`.
pub fn generate_with_progress(config: &CaveConfig, progress: &Progress) -> Result<Cave> {
    config.validate()?;

    let seed = config.seed.resolve();
    log::debug!(
        "generating {}x{} cave from seed {} ({}), fill {}%, {} smoothing steps",
        config.width,
        config.height,
        config.seed,
        seed,
        config.fill_percent,
        config.smoothing_steps
    );

    progress.report(0, STAGES, "Filling");
    let filled = random_fill(config.width, config.height, config.fill_percent, seed);
    let field = smooth_with_progress(
        &filled,
        config.smoothing_steps,
        config.parallel,
        &progress.stage(1, STAGES),
    );
    log::debug!(
        "field ready: {} of {} cells are walls",
        field.wall_count(),
        config.width * config.height
    );

    progress.report(2, STAGES, "Building grid");
    let grid = SquareGrid::build(&field, config.cell_size)?;

    let floor = triangulate_with_progress(&grid, &progress.stage(3, STAGES));

    progress.report(4, STAGES, "Extruding walls");
    let outlines = extract_outlines(floor.mesh.vertices(), &floor.adjacency, floor.interior);
    let walls = extrude_walls(&outlines, floor.mesh.vertices(), config.wall_height);

    progress.report(STAGES, STAGES, "Done");
    log::info!(
        "generated cave: {} floor triangles, {} outlines, {} wall triangles",
        floor.mesh.num_triangles(),
        outlines.len(),
        walls.num_triangles()
    );

    Ok(Cave {
        seed,
        field,
        floor: floor.mesh,
        outlines,
        walls,
    })
}
