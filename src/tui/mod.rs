//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates mouse/keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws when a drained batch produced an action or resized the
//! terminal. All pending events are drained before the next draw so a fast
//! drag paints every cell it crosses without a redraw in between.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::map_file;
use crate::core::state::App;
use crate::tui::components::map_view::hit_test;
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Terminal columns per tile
    pub cell_width: u16,
}

impl TuiState {
    pub fn new(cell_width: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Run the editor until the user quits. The terminal is restored even when
/// the loop fails.
pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let tui = TuiState::new(config.cell_width);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable mouse capture: {}", e);
            app.status_message = "Mouse capture unavailable".to_string();
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &tui);

    if config.save_on_quit && app.dirty {
        info!("Saving unsaved changes on quit");
        map_file::save_current_map(&mut app);
    }

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &TuiState) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut map_area = Rect::default();

    loop {
        if needs_redraw {
            let frame = terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            map_area = ui::map_inner_area(frame.area);
            needs_redraw = false;
        }

        let Some(first_event) = poll_event() else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        let events = std::iter::once(first_event).chain(std::iter::from_fn(poll_event_immediate));
        let outcome = apply_events(app, events, &mut map_area, tui.cell_width);
        if outcome.quit {
            debug!("Quit requested");
            return Ok(());
        }
        needs_redraw = outcome.redraw;
    }
}

/// What a drained batch of events asks of the loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BatchOutcome {
    redraw: bool,
    quit: bool,
}

/// Feed a batch of events through the reducer. A resize re-lays out the
/// screen so later pointer events in the same batch hit-test against the
/// new map area. Stops at the first quit.
fn apply_events(
    app: &mut App,
    events: impl IntoIterator<Item = TuiEvent>,
    map_area: &mut Rect,
    cell_width: u16,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for event in events {
        if let TuiEvent::Resize(width, height) = event {
            *map_area = ui::map_inner_area(Rect::new(0, 0, width, height));
            outcome.redraw = true;
            continue;
        }
        let Some(action) = to_action(event, *map_area, cell_width) else {
            continue;
        };
        outcome.redraw = true;
        match update(app, action) {
            Effect::None => {}
            Effect::SaveMap => map_file::save_current_map(app),
            Effect::Quit => {
                outcome.quit = true;
                break;
            }
        }
    }

    outcome
}

/// Turn a TUI event into a core action. Pointer events outside the map
/// viewport produce nothing.
fn to_action(event: TuiEvent, map_area: Rect, cell_width: u16) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Save => Some(Action::Save),
        TuiEvent::SelectTile(tile) => Some(Action::SelectTile(tile)),
        TuiEvent::Paint(col, row) => hit_test(map_area, cell_width, col, row).map(Action::Paint),
        TuiEvent::Erase(col, row) => hit_test(map_area, cell_width, col, row).map(Action::Erase),
        // Handled by the batch, which owns the layout
        TuiEvent::Resize(..) => None,
    }
}
