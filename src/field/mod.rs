//! Binary wall/empty fields and their generation.
//!
//! A [`BinaryField`] is the input of the marching-squares stage: a W×H grid
//! whose cells are either `1` (wall) or `0` (empty). Fields are produced by
//! [`generate_field`], which fills a grid randomly from a [`Seed`] and then
//! relaxes it with a cellular automaton (see [`smooth`]).
//!
//! # Example
//!
//! ```
//! use grotto::field::{generate_field, FieldOptions, Seed};
//!
//! let options = FieldOptions::new(32, 24)
//!     .with_fill_percent(45)
//!     .with_smoothing_steps(4)
//!     .with_seed(Seed::text("mossy"));
//! let field = generate_field(&options).unwrap();
//!
//! assert!(field.has_solid_border());
//! assert_eq!(field, generate_field(&options).unwrap());
//! ```

mod automaton;
mod generator;
mod seed;

use std::fmt;

pub use automaton::{smooth, smooth_step, smooth_with_progress};
pub use generator::{generate_field, generate_seeded, random_fill, FieldOptions};
pub use seed::Seed;

/// Cell value of a wall.
pub const WALL: u8 = 1;

/// Cell value of an empty cell.
pub const EMPTY: u8 = 0;

/// A W×H grid of wall (`1`) and empty (`0`) cells.
///
/// Cells are addressed as `(x, y)` with `x` in `0..width` and `y` in
/// `0..height`; `y` grows "upward" (toward +Z in mesh space).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BinaryField {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl BinaryField {
    /// Create a field where every cell has value `value` (`0` or `1`).
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        debug_assert!(value <= WALL, "field values are 0 or 1, got {}", value);
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Create a field by evaluating `f(x, y)` for every cell; `true` is a wall.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut field = Self::filled(width, height, EMPTY);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    field.cells[y * width + x] = WALL;
                }
            }
        }
        field
    }

    /// Parse an ASCII picture: `#` is a wall, anything else is empty.
    ///
    /// The first row is the top of the field (highest `y`). Rows must all have
    /// the same length.
    ///
    /// ```
    /// use grotto::field::BinaryField;
    ///
    /// let field = BinaryField::from_ascii(&[
    ///     "###",
    ///     "#.#",
    ///     "###",
    /// ]);
    /// assert!(!field.is_wall(1, 1));
    /// assert_eq!(field.wall_count(), 8);
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let parsed: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        assert!(
            parsed.iter().all(|r| r.len() == width),
            "ASCII field rows must all have width {}",
            width
        );
        Self::from_fn(width, height, |x, y| parsed[height - 1 - y][x])
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value of the cell at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Whether `(x, y)` is a wall.
    #[inline]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == WALL
    }

    /// Whether `(x, y)` lies on the outermost ring of cells.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == WALL).count()
    }

    /// Raw cell values, row by row from `y = 0`.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Walls among the 8 neighbours of `(x, y)`.
    ///
    /// Neighbours outside the field count as walls.
    pub fn surrounding_wall_count(&self, x: usize, y: usize) -> u32 {
        let mut count = 0;
        for ny in y as isize - 1..=y as isize + 1 {
            for nx in x as isize - 1..=x as isize + 1 {
                if nx == x as isize && ny == y as isize {
                    continue;
                }
                let inside = nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.width
                    && (ny as usize) < self.height;
                if !inside || self.is_wall(nx as usize, ny as usize) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether every border cell is a wall.
    pub fn has_solid_border(&self) -> bool {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_border(x, y))
            .all(|(x, y)| self.is_wall(x, y))
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }
}

/// Renders the field as rows of `#` (wall) and `.` (empty), top row first.
impl fmt::Display for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                f.write_str(if self.is_wall(x, y) { "#" } else { "." })?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BinaryField {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_round_trip() {
        let rows = ["#####", "#..##", "#...#", "#####"];
        let field = BinaryField::from_ascii(&rows);
        assert_eq!(field.width(), 5);
        assert_eq!(field.height(), 4);
        // Top row of the picture is y = 3.
        assert!(field.is_wall(3, 2));
        assert!(!field.is_wall(1, 1));
        assert_eq!(field.to_string(), rows.join("\n"));
    }

    #[test]
    fn test_surrounding_count_treats_outside_as_wall() {
        let field = BinaryField::filled(3, 3, EMPTY);
        // Corner cell: 5 of its 8 neighbours are outside.
        assert_eq!(field.surrounding_wall_count(0, 0), 5);
        // Edge cell: 3 outside.
        assert_eq!(field.surrounding_wall_count(1, 0), 3);
        // Center: nothing outside, nothing walled.
        assert_eq!(field.surrounding_wall_count(1, 1), 0);
    }

    #[test]
    fn test_surrounding_count_excludes_center() {
        let field = BinaryField::filled(3, 3, WALL);
        assert_eq!(field.surrounding_wall_count(1, 1), 8);
    }

    #[test]
    fn test_solid_border() {
        let ring = BinaryField::from_fn(4, 4, |x, y| x == 0 || y == 0 || x == 3 || y == 3);
        assert!(ring.has_solid_border());
        assert_eq!(ring.wall_count(), 12);

        let open = BinaryField::from_ascii(&["#.#", "#.#", "###"]);
        assert!(!open.has_solid_border());
    }
}
