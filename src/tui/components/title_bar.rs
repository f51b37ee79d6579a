//! # TitleBar Component
//!
//! Top status bar showing the open map and the latest status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Unsaved changes**: `"Tilemap Editor (map.ber*) | Selected: Exit"`
//! 2. **Status message**: `"Tilemap Editor (map.ber) | Saved map.ber at 12:00:01"`
//! 3. **Default**: `"Tilemap Editor (map.ber)"`
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// File name of the open map (e.g., "map.ber")
    pub map_name: String,
    /// Status message (e.g., "Selected: Wall", "Save failed: ...")
    pub status_message: String,
    /// Whether there are unsaved changes
    pub dirty: bool,
}

impl TitleBar {
    pub fn new(map_name: String, status_message: String, dirty: bool) -> Self {
        Self {
            map_name,
            status_message,
            dirty,
        }
    }

    fn title_text(&self) -> String {
        let marker = if self.dirty { "*" } else { "" };
        if self.status_message.is_empty() {
            format!("Tilemap Editor ({}{})", self.map_name, marker)
        } else {
            format!(
                "Tilemap Editor ({}{}) | {}",
                self.map_name, marker, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    /// The title bar is always a single line, so a plain Span is enough.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_new() {
        let title_bar = TitleBar::new("map.ber".to_string(), "Ready".to_string(), false);
        assert_eq!(title_bar.map_name, "map.ber");
        assert_eq!(title_bar.status_message, "Ready");
        assert!(!title_bar.dirty);
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar =
            TitleBar::new("castle.ber".to_string(), "Selected: Exit".to_string(), false);
        let text = rendered(&mut title_bar);

        assert!(text.contains("Tilemap Editor (castle.ber)"));
        assert!(text.contains("| Selected: Exit"));
    }

    #[test]
    fn test_title_bar_marks_unsaved_changes() {
        let mut title_bar = TitleBar::new("map.ber".to_string(), "".to_string(), true);
        let text = rendered(&mut title_bar);

        assert!(text.contains("(map.ber*)"));
        assert!(!text.contains('|'));
    }
}
