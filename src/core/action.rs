//! # Actions
//!
//! Everything that can happen in the editor becomes an `Action`.
//! User left-drags over a cell? That's `Action::Paint(pos)`.
//! User presses `s`? That's `Action::Save`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the caller must perform.
//! No side effects here. File writes happen in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::core::tile::{Position, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the selected tile (left button).
    Paint(Position),
    /// Place Floor (right button).
    Erase(Position),
    SelectTile(Tile),
    Save,
    Quit,
}

/// Work the caller must do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SaveMap,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Paint(pos) => {
            let tile = app.selected;
            if app.place(pos, tile) {
                debug!("Painted {} at {}", tile.name(), pos);
            }
            Effect::None
        }
        Action::Erase(pos) => {
            if app.place(pos, Tile::Floor) {
                debug!("Erased {}", pos);
            }
            Effect::None
        }
        Action::SelectTile(tile) => {
            app.selected = tile;
            app.status_message = format!("Selected: {}", tile.name());
            Effect::None
        }
        Action::Save => Effect::SaveMap,
        Action::Quit => Effect::Quit,
    }
}
