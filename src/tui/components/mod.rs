//! # TUI Components
//!
//! All UI components for the terminal interface. Every component here is
//! stateless: it receives its data as props (struct fields) and renders it.
//!
//! - `TitleBar`: Top status bar showing the map file and status message
//! - `MapView`: The tile grid, plus the screen → grid hit test
//! - `Legend`: Tile swatches, selected tile, control hints
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (Top status bar)
//! ├── map_view.rs   (Grid viewport)
//! └── legend.rs     (Tile legend)
//! ```

pub mod legend;
pub mod map_view;
mod title_bar;

pub use legend::Legend;
pub use map_view::MapView;
pub use title_bar::TitleBar;
