//! # Core Editor Logic
//!
//! This module contains the tilemap editor's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Grid (tiles+markers) │
//!                    │  • map_file (.ber I/O)  │
//!                    │  • State / Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tile`]: The `Tile` enum and `Position`
//! - [`grid`]: The `Grid` model and its single-Player/single-Exit bookkeeping
//! - [`map_file`]: Reading and writing `.ber` files
//! - [`state`]: The `App` struct, all editor state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`launch`]: Command-line arguments → editor session
//! - [`config`]: Layered settings

pub mod action;
pub mod config;
pub mod grid;
pub mod launch;
pub mod map_file;
pub mod state;
pub mod tile;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use tile::{Position, Tile};
