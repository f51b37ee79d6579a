//! # Map Persistence
//!
//! Save/load grids as `.ber` files.
//!
//! The format is plain text: one line per row, one character per cell,
//! `\n` after every row. There is no header; width and height come from the
//! line length and line count.
//!
//! ```text
//! 11111
//! 1E0P1
//! 10001
//! 11111
//! ```
//!
//! Writes use atomic rename (write `<path>.tmp`, then `rename()`).

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, info, warn};

use crate::core::grid::{Grid, GridError};
use crate::core::state::App;
use crate::core::tile::Tile;

#[derive(Debug)]
pub enum MapError {
    Io(io::Error),
    /// A character outside the tile set. `line` and `column` are 1-based.
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
    Grid(GridError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "map I/O error: {e}"),
            MapError::UnknownSymbol {
                line,
                column,
                symbol,
            } => write!(f, "unknown tile {symbol:?} at line {line}, column {column}"),
            MapError::Grid(e) => write!(f, "invalid map: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::Grid(e) => Some(e),
            MapError::UnknownSymbol { .. } => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        MapError::Grid(e)
    }
}

/// Serialize a grid: each row's symbols followed by `\n`, top to bottom.
pub fn encode(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|t| t.symbol()));
        out.push('\n');
    }
    out
}

/// Parse `.ber` text. Accepts `\n` or `\r\n` line endings.
///
/// Blank lines at the end of the file are ignored. Any other ragged row and
/// any unknown symbol is rejected rather than padded or guessed at.
pub fn decode(text: &str) -> Result<Grid, MapError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let rows = lines
        .into_iter()
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, symbol)| {
                    Tile::from_symbol(symbol).ok_or(MapError::UnknownSymbol {
                        line: y + 1,
                        column: x + 1,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(rows)?)
}

/// Write `grid` to `path`, replacing any existing file.
pub fn save(grid: &Grid, path: &Path) -> Result<(), MapError> {
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, encode(grid))?;
    fs::rename(&tmp_path, path)?;
    debug!(
        "Wrote {}x{} map to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

/// Read a grid from `path` and recover the Player/Exit markers.
pub fn load(path: &Path) -> Result<Grid, MapError> {
    let text = fs::read_to_string(path)?;
    let grid = decode(&text)?;
    info!(
        "Loaded {}x{} map from {} (player: {:?}, exit: {:?})",
        grid.width(),
        grid.height(),
        path.display(),
        grid.player(),
        grid.exit()
    );
    Ok(grid)
}

/// `map.ber` → `map.ber.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Save the app's map to its path. This is the single entry point for
/// persistence from the TUI (save key, save-on-quit). Outcome goes to the
/// status bar; errors never propagate into the event loop.
pub fn save_current_map(app: &mut App) {
    match save(&app.grid, &app.map_path) {
        Ok(()) => {
            app.dirty = false;
            app.status_message = format!(
                "Saved {} at {}",
                app.map_name(),
                Local::now().format("%H:%M:%S")
            );
            info!("Map saved: {}", app.map_path.display());
        }
        Err(e) => {
            warn!("Failed to save map {}: {}", app.map_path.display(), e);
            app.status_message = format!("Save failed: {e}");
        }
    }
}
