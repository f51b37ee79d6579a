//! # Launch
//!
//! Turns the positional command-line arguments into an editor session.
//!
//! | Arguments               | Mode                                   |
//! |-------------------------|----------------------------------------|
//! | `name`                  | open `<name>.ber` (must exist)         |
//! | `width height`          | new empty map, configured default name |
//! | `width height name`     | new empty map `<name>.ber`             |
//! | anything else           | print usage, do nothing                |
//!
//! New maps are written to disk immediately, before the editor opens.

use std::fmt;
use std::path::PathBuf;

use log::{info, warn};

use crate::core::grid::{Grid, MIN_DIMENSION};
use crate::core::map_file::{self, MapError};
use crate::core::state::App;

pub const USAGE: &str = "\
Usage: tilepaint <name>                 open <name>.ber
       tilepaint <width> <height> [name] create an empty map (width, height >= 3)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    Open {
        name: String,
    },
    /// `name` is `None` when only dimensions were given; the caller picks
    /// the configured default.
    Create {
        width: usize,
        height: usize,
        name: Option<String>,
    },
    Usage,
}

#[derive(Debug)]
pub enum LaunchError {
    MapNotFound(PathBuf),
    InvalidDimensions { width: String, height: String },
    Map { path: PathBuf, source: MapError },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::MapNotFound(path) => write!(f, "File {} not found.", path.display()),
            LaunchError::InvalidDimensions { width, height } => write!(
                f,
                "Width and height must be integers greater than or equal to {MIN_DIMENSION} (got {width:?} x {height:?})."
            ),
            LaunchError::Map { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Map { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Classify positional arguments. Pure: touches neither the filesystem nor
/// the config, so usage and bad dimensions can be reported before either.
pub fn parse_args(args: &[String]) -> Result<LaunchMode, LaunchError> {
    match args {
        [name] => Ok(LaunchMode::Open { name: name.clone() }),
        [width, height] => {
            let (width, height) = parse_dimensions(width, height)?;
            Ok(LaunchMode::Create {
                width,
                height,
                name: None,
            })
        }
        [width, height, name] => {
            let (width, height) = parse_dimensions(width, height)?;
            Ok(LaunchMode::Create {
                width,
                height,
                name: Some(name.clone()),
            })
        }
        _ => Ok(LaunchMode::Usage),
    }
}

fn parse_dimensions(width: &str, height: &str) -> Result<(usize, usize), LaunchError> {
    let invalid = || LaunchError::InvalidDimensions {
        width: width.to_string(),
        height: height.to_string(),
    };
    let w: usize = width.trim().parse().map_err(|_| invalid())?;
    let h: usize = height.trim().parse().map_err(|_| invalid())?;
    if w < MIN_DIMENSION || h < MIN_DIMENSION {
        return Err(invalid());
    }
    Ok((w, h))
}

/// `<name>.<extension>`
pub fn map_path(name: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{name}.{extension}"))
}

/// Load an existing map into a fresh `App`.
pub fn open_map(name: &str, extension: &str) -> Result<App, LaunchError> {
    let path = map_path(name, extension);
    if !path.exists() {
        return Err(LaunchError::MapNotFound(path));
    }
    let grid = map_file::load(&path).map_err(|source| LaunchError::Map {
        path: path.clone(),
        source,
    })?;
    let mut app = App::new(grid, path);
    app.status_message = format!("Opened {}", app.map_name());
    Ok(app)
}

/// Create an empty map, write it out, and wrap it in an `App`.
pub fn create_map(
    width: usize,
    height: usize,
    name: &str,
    extension: &str,
) -> Result<App, LaunchError> {
    let path = map_path(name, extension);
    let grid = Grid::create_empty(width, height).map_err(|e| LaunchError::Map {
        path: path.clone(),
        source: MapError::Grid(e),
    })?;
    if path.exists() {
        warn!("Overwriting existing map {}", path.display());
    }
    map_file::save(&grid, &path).map_err(|source| LaunchError::Map {
        path: path.clone(),
        source,
    })?;
    info!("Created {}x{} map at {}", width, height, path.display());

    let mut app = App::new(grid, path);
    app.status_message = format!("Created {}", app.map_name());
    Ok(app)
}
