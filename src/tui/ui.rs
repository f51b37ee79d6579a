use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::legend::LEGEND_HEIGHT;
use crate::tui::components::{Legend, MapView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Split the frame into title bar, map viewport, and legend.
fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(LEGEND_HEIGHT)]).areas(area)
}

/// Where tiles land on screen for a given frame size. Shared by drawing and
/// mouse hit-testing so both agree.
pub fn map_inner_area(frame_area: Rect) -> Rect {
    let [_, map_area, _] = layout(frame_area);
    MapView::inner_area(map_area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let [title_area, map_area, legend_area] = layout(frame.area());

    TitleBar::new(app.map_name(), app.status_message.clone(), app.dirty).render(frame, title_area);
    MapView::new(&app.grid, tui.cell_width).render(frame, map_area);
    Legend::new(app.selected).render(frame, legend_area);
}
