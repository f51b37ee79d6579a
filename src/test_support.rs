//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use crate::core::grid::Grid;
use crate::core::state::App;

/// A unique, not-yet-existing `.ber` path in the system temp dir.
pub fn temp_map_path() -> PathBuf {
    std::env::temp_dir().join(format!("tilepaint-test-{}.ber", uuid::Uuid::new_v4()))
}

/// Creates a test App holding an empty 5x4 map at a fresh temp path.
pub fn test_app() -> App {
    let grid = Grid::create_empty(5, 4).expect("5x4 is a valid grid");
    App::new(grid, temp_map_path())
}
