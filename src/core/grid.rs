//! # Grid Model
//!
//! Owns the tile matrix and the unique Player/Exit markers.
//!
//! ```text
//! Grid
//! ├── width, height        // fixed after creation/load
//! ├── cells: Vec<Vec<Tile>> // row-major, cells[y][x]
//! ├── player: Option<Position>
//! └── exit: Option<Position>
//! ```
//!
//! All mutation goes through `place_tile`, which keeps the markers in sync
//! with the matrix: at most one recorded Player and one recorded Exit, and a
//! recorded marker always points at a cell holding that symbol.

use std::fmt;

use crate::core::tile::{Position, Tile};

/// Smallest width/height `create_empty` accepts.
pub const MIN_DIMENSION: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `create_empty` called with a dimension below `MIN_DIMENSION`.
    TooSmall { width: usize, height: usize },
    /// No rows at all (or a first row with no cells).
    Empty,
    /// A row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::TooSmall { width, height } => write!(
                f,
                "grid {width}x{height} is too small (minimum {MIN_DIMENSION}x{MIN_DIMENSION})"
            ),
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Tile>>,
    player: Option<Position>,
    exit: Option<Position>,
}

impl Grid {
    /// Walls around the perimeter, floor everywhere else, no markers.
    pub fn create_empty(width: usize, height: usize) -> Result<Self, GridError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GridError::TooSmall { width, height });
        }

        let cells = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
                            Tile::Wall
                        } else {
                            Tile::Floor
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            width,
            height,
            cells,
            player: None,
            exit: None,
        })
    }

    /// Build a grid from already-decoded rows.
    ///
    /// Width comes from the first row; every other row must match it.
    /// The first Player and first Exit found in row-major order become the
    /// recorded markers. Later duplicates stay in the matrix as they are.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        let mut grid = Self {
            width,
            height: rows.len(),
            cells: rows,
            player: None,
            exit: None,
        };
        grid.player = grid.find_first(Tile::Player);
        grid.exit = grid.find_first(Tile::Exit);
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.cells
    }

    pub fn player(&self) -> Option<Position> {
        self.player
    }

    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&t| t == tile).count())
            .sum()
    }

    /// Put `tile` at `(x, y)`. Returns `false` (and changes nothing) when the
    /// coordinate is outside the grid.
    ///
    /// Placing a Player or Exit resets the previously recorded one to Floor.
    /// Overwriting the recorded Player/Exit cell with anything else clears
    /// that marker.
    pub fn place_tile(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let here = Position::new(x, y);

        match tile {
            Tile::Player => {
                if let Some(old) = self.player.replace(here) {
                    self.cells[old.y][old.x] = Tile::Floor;
                }
            }
            Tile::Exit => {
                if let Some(old) = self.exit.replace(here) {
                    self.cells[old.y][old.x] = Tile::Floor;
                }
            }
            _ => {}
        }

        if tile != Tile::Player && self.player == Some(here) {
            self.player = None;
        }
        if tile != Tile::Exit && self.exit == Some(here) {
            self.exit = None;
        }

        self.cells[y][x] = tile;
        true
    }

    fn find_first(&self, tile: Tile) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|&t| t == tile)
                .map(|x| Position::new(x, y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_border(grid: &Grid, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == grid.width() - 1 || y == grid.height() - 1
    }

    #[test]
    fn test_create_empty_border_and_interior() {
        for (w, h) in [(3, 3), (5, 4), (4, 9), (17, 6)] {
            let grid = Grid::create_empty(w, h).unwrap();
            assert_eq!(grid.width(), w);
            assert_eq!(grid.height(), h);
            for y in 0..h {
                for x in 0..w {
                    let expected = if is_border(&grid, x, y) {
                        Tile::Wall
                    } else {
                        Tile::Floor
                    };
                    assert_eq!(grid.get(x, y), Some(expected), "cell ({x}, {y}) in {w}x{h}");
                }
            }
            assert_eq!(grid.player(), None);
            assert_eq!(grid.exit(), None);
        }
    }

    #[test]
    fn test_create_empty_rejects_small_dimensions() {
        assert_eq!(
            Grid::create_empty(2, 5),
            Err(GridError::TooSmall { width: 2, height: 5 })
        );
        assert!(Grid::create_empty(5, 0).is_err());
    }

    #[test]
    fn test_placing_exit_moves_previous_exit() {
        let mut grid = Grid::create_empty(6, 6).unwrap();
        assert!(grid.place_tile(1, 1, Tile::Exit));
        assert!(grid.place_tile(4, 3, Tile::Exit));

        assert_eq!(grid.get(1, 1), Some(Tile::Floor));
        assert_eq!(grid.get(4, 3), Some(Tile::Exit));
        assert_eq!(grid.exit(), Some(Position::new(4, 3)));
        assert_eq!(grid.count(Tile::Exit), 1);
    }

    #[test]
    fn test_exit_on_border_resets_wall_to_floor_when_moved() {
        let mut grid = Grid::create_empty(5, 5).unwrap();
        grid.place_tile(0, 2, Tile::Exit);
        grid.place_tile(2, 2, Tile::Exit);
        // The old cell becomes Floor, not the Wall that was there before.
        assert_eq!(grid.get(0, 2), Some(Tile::Floor));
    }

    #[test]
    fn test_player_is_independent_of_exit() {
        let mut grid = Grid::create_empty(6, 6).unwrap();
        grid.place_tile(1, 1, Tile::Exit);
        grid.place_tile(2, 2, Tile::Player);
        grid.place_tile(3, 3, Tile::Player);

        assert_eq!(grid.get(1, 1), Some(Tile::Exit));
        assert_eq!(grid.get(2, 2), Some(Tile::Floor));
        assert_eq!(grid.get(3, 3), Some(Tile::Player));
        assert_eq!(grid.player(), Some(Position::new(3, 3)));
        assert_eq!(grid.exit(), Some(Position::new(1, 1)));
        assert_eq!(grid.count(Tile::Player), 1);
        assert_eq!(grid.count(Tile::Exit), 1);
    }

    #[test]
    fn test_replacing_player_on_same_cell() {
        let mut grid = Grid::create_empty(4, 4).unwrap();
        grid.place_tile(1, 1, Tile::Player);
        grid.place_tile(1, 1, Tile::Player);
        assert_eq!(grid.get(1, 1), Some(Tile::Player));
        assert_eq!(grid.player(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_a_no_op() {
        let mut grid = Grid::create_empty(4, 4).unwrap();
        grid.place_tile(1, 1, Tile::Player);
        let before = grid.clone();

        assert!(!grid.place_tile(4, 0, Tile::Exit));
        assert!(!grid.place_tile(0, 4, Tile::Player));
        assert!(!grid.place_tile(usize::MAX, usize::MAX, Tile::Wall));

        assert_eq!(grid, before);
    }

    // Marker overwrite policy: painting any other symbol over the recorded
    // Player/Exit cell clears the marker. The older editor left the stale
    // coordinate behind, and the next Player placement would then "reset"
    // whatever had been painted there.
    #[test]
    fn test_overwriting_player_cell_clears_player_position() {
        let mut grid = Grid::create_empty(5, 5).unwrap();
        grid.place_tile(2, 2, Tile::Player);
        grid.place_tile(2, 2, Tile::Collectible);
        assert_eq!(grid.player(), None);

        grid.place_tile(3, 3, Tile::Player);
        assert_eq!(grid.get(2, 2), Some(Tile::Collectible));
    }

    #[test]
    fn test_overwriting_exit_cell_clears_exit_position() {
        let mut grid = Grid::create_empty(5, 5).unwrap();
        grid.place_tile(1, 3, Tile::Exit);
        grid.place_tile(1, 3, Tile::Floor);
        assert_eq!(grid.exit(), None);
        assert_eq!(grid.count(Tile::Exit), 0);
    }

    #[test]
    fn test_player_over_exit_clears_exit() {
        let mut grid = Grid::create_empty(5, 5).unwrap();
        grid.place_tile(2, 1, Tile::Exit);
        grid.place_tile(2, 1, Tile::Player);
        assert_eq!(grid.exit(), None);
        assert_eq!(grid.player(), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_from_rows_records_first_markers() {
        use Tile::*;
        let rows = vec![
            vec![Wall, Wall, Wall, Wall],
            vec![Wall, Exit, Player, Wall],
            vec![Wall, Player, Exit, Wall],
            vec![Wall, Wall, Wall, Wall],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.player(), Some(Position::new(2, 1)));
        assert_eq!(grid.exit(), Some(Position::new(1, 1)));
        // Duplicates are left alone.
        assert_eq!(grid.count(Player), 2);
        assert_eq!(grid.count(Exit), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        use Tile::*;
        let rows = vec![vec![Wall, Wall, Wall], vec![Wall, Floor]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Grid::from_rows(Vec::new()), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![Vec::new()]), Err(GridError::Empty));
    }

    #[test]
    fn test_from_rows_allows_small_loaded_maps() {
        let grid = Grid::from_rows(vec![vec![Tile::Player, Tile::Exit]]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
    }
}
