//! Bounded occupancy grid with random obstacle placement

use std::fmt;

use rand::{rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Free,
    Obstacle,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Obstacle => '#',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Free),
            '#' => Some(Cell::Obstacle),
            _ => None,
        }
    }
}

/// Grid generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells, including the border
    pub width: usize,

    /// Grid height in cells, including the border
    pub height: usize,

    /// Number of random interior obstacles
    pub obstacles: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            obstacles: 30,
        }
    }
}

impl GridConfig {
    /// Number of interior cells available for obstacles and the rover
    pub fn interior_capacity(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.width < 3 || self.height < 3 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "grid must be at least 3x3 to have an interior, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if self.obstacles > self.interior_capacity() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "{} obstacles do not fit in a {}x{} interior ({} cells)",
                    self.obstacles,
                    self.width - 2,
                    self.height - 2,
                    self.interior_capacity()
                ),
            });
        }
        Ok(())
    }
}

/// Bounded occupancy grid
///
/// Every edge cell of a generated grid is an obstacle, so rays cast from any
/// interior cell terminate inside the grid. Out-of-bounds coordinates count
/// as blocked, which keeps fixed test layouts safe even without a border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridWorld {
    /// Generate a bordered grid with randomly placed interior obstacles.
    ///
    /// Obstacle cells are a uniform sample of distinct interior cells, so
    /// the configured count is placed exactly.
    pub fn generate(config: &GridConfig, rng: &mut StdRng) -> Result<Self> {
        config.validate()?;

        let interior: Vec<(usize, usize)> = (1..config.height - 1)
            .flat_map(|y| (1..config.width - 1).map(move |x| (x, y)))
            .collect();

        let mut grid = Self::bordered(config.width, config.height);
        for &(x, y) in interior.choose_multiple(rng, config.obstacles) {
            grid.cells[y * config.width + x] = Cell::Obstacle;
        }
        Ok(grid)
    }

    /// Parse a fixed layout from rows of `#` (obstacle) and `.` (free)
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(Error::InvalidLayout {
                message: "layout must have at least one non-empty row".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::InvalidLayout {
                    message: format!(
                        "row {} has {} cells, expected {}",
                        y,
                        row.chars().count(),
                        width
                    ),
                });
            }
            for (x, character) in row.chars().enumerate() {
                let cell = Cell::from_char(character).ok_or(Error::InvalidLayoutCell {
                    character,
                    row: y,
                    column: x,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn bordered(width: usize, height: usize) -> Self {
        let mut cells = vec![Cell::Free; width * height];
        for x in 0..width {
            cells[x] = Cell::Obstacle;
            cells[(height - 1) * width + x] = Cell::Obstacle;
        }
        for y in 0..height {
            cells[y * width] = Cell::Obstacle;
            cells[y * width + width - 1] = Cell::Obstacle;
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at in-bounds coordinates
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Whether the coordinates are blocked; anything out of bounds is
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return true;
        }
        self.cells[y as usize * self.width + x as usize] == Cell::Obstacle
    }

    /// Interior cells that are currently free
    pub fn free_interior_cells(&self) -> Vec<(usize, usize)> {
        let mut free = Vec::new();
        for y in 1..self.height.saturating_sub(1) {
            for x in 1..self.width.saturating_sub(1) {
                if self.cell(x, y) == Cell::Free {
                    free.push((x, y));
                }
            }
        }
        free
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.cell(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
        assert_eq!(config.obstacles, 30);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_missing_interior() {
        let config = GridConfig {
            width: 2,
            height: 5,
            obstacles: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_overfull_interior() {
        let config = GridConfig {
            width: 4,
            height: 4,
            obstacles: 5,
        };
        assert_eq!(config.interior_capacity(), 4);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_generate_places_border_and_exact_obstacle_count() {
        let config = GridConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridWorld::generate(&config, &mut rng).unwrap();

        for x in 0..10 {
            assert!(grid.is_blocked(x, 0));
            assert!(grid.is_blocked(x, 9));
        }
        for y in 0..10 {
            assert!(grid.is_blocked(0, y));
            assert!(grid.is_blocked(9, y));
        }

        let free = grid.free_interior_cells().len();
        assert_eq!(free, config.interior_capacity() - config.obstacles);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let config = GridConfig::default();
        let first = GridWorld::generate(&config, &mut StdRng::seed_from_u64(11)).unwrap();
        let second = GridWorld::generate(&config, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_rows_parses_sealed_layout() {
        let grid = GridWorld::from_rows(&["###", "#.#", "###"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(!grid.is_blocked(1, 1));
        assert_eq!(grid.free_interior_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = GridWorld::from_rows(&["###", "#.##", "###"]);
        assert!(matches!(result, Err(Error::InvalidLayout { .. })));
    }

    #[test]
    fn test_from_rows_rejects_unknown_character() {
        let result = GridWorld::from_rows(&["###", "#?#", "###"]);
        assert!(matches!(
            result,
            Err(Error::InvalidLayoutCell {
                character: '?',
                row: 1,
                column: 1,
            })
        ));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let grid = GridWorld::from_rows(&["###", "#.#", "###"]).unwrap();
        assert!(grid.is_blocked(-1, 1));
        assert!(grid.is_blocked(1, -1));
        assert!(grid.is_blocked(3, 1));
        assert!(grid.is_blocked(1, 3));
    }

    #[test]
    fn test_display_round_trips_layout() {
        let rows = ["####", "#..#", "#.##", "####"];
        let grid = GridWorld::from_rows(&rows).unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered, "####\n#..#\n#.##\n####\n");
    }
}
