//! # Application State
//!
//! Core editor state. Domain logic only - no TUI-specific types.
//! Presentation state (cell width, layout) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── grid: Grid              // tile matrix + Player/Exit markers
//! ├── selected: Tile          // tile painted by the left button
//! ├── map_path: PathBuf       // where Save writes
//! ├── status_message: String  // status bar text
//! └── dirty: bool             // unsaved changes
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::PathBuf;

use crate::core::grid::Grid;
use crate::core::tile::{Position, Tile};

#[derive(Debug)]
pub struct App {
    pub grid: Grid,
    pub selected: Tile,
    pub map_path: PathBuf,
    pub status_message: String,
    /// True when the grid differs from what was last written to `map_path`.
    pub dirty: bool,
}

impl App {
    pub fn new(grid: Grid, map_path: PathBuf) -> Self {
        Self {
            grid,
            selected: Tile::Wall,
            map_path,
            status_message: String::from("Ready"),
            dirty: false,
        }
    }

    /// File name shown in the title bar (`map.ber`).
    pub fn map_name(&self) -> String {
        self.map_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.map_path.display().to_string())
    }

    /// Place `tile` at `pos`, marking the map dirty when the request lands.
    pub fn place(&mut self, pos: Position, tile: Tile) -> bool {
        let placed = self.grid.place_tile(pos.x, pos.y, tile);
        if placed {
            self.dirty = true;
        }
        placed
    }
}
