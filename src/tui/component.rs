use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. They hold no editor state of their own;
/// everything they show comes from `App` or `TuiState`.
///
/// `render` takes `&mut self` to match Ratatui's `StatefulWidget` pattern,
/// so a component can cache layout between frames if it needs to.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
