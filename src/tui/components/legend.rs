//! # Legend Component
//!
//! Bottom panel: one swatch per tile with its key, then the selected tile
//! and the control hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::tile::Tile;
use crate::tui::component::Component;
use crate::tui::components::map_view::tile_style;

/// Rows the legend needs, border included.
pub const LEGEND_HEIGHT: u16 = 4;

pub struct Legend {
    pub selected: Tile,
}

impl Legend {
    pub fn new(selected: Tile) -> Self {
        Self { selected }
    }

    fn swatches(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(Tile::ALL.len() * 3);
        for tile in Tile::ALL {
            let label_style = if tile == self.selected {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} ", tile.symbol()), tile_style(tile)));
            spans.push(Span::styled(format!(" {}", tile.name()), label_style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn status(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(
                format!(" {} ", self.selected.symbol()),
                tile_style(self.selected),
            ),
            Span::raw(format!(" {}", self.selected.name())),
            Span::styled(
                "   left: paint  right: erase  s: save  q: quit",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    }
}

impl Component for Legend {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph =
            Paragraph::new(vec![self.swatches(), self.status()]).block(Block::bordered().title("Tiles"));
        frame.render_widget(paragraph, area);
    }
}
