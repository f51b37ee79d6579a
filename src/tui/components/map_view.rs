//! # MapView Component
//!
//! Draws the grid inside a bordered viewport. Each tile is `cell_width`
//! terminal columns wide and one row tall, filled with the tile's color and
//! labelled with its symbol. Maps larger than the viewport are clipped at
//! the right and bottom edges.
//!
//! `hit_test` is the inverse mapping, used by the event loop to turn a mouse
//! position into a grid coordinate.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::grid::Grid;
use crate::core::tile::{Position, Tile};
use crate::tui::component::Component;

pub struct MapView<'a> {
    pub grid: &'a Grid,
    pub cell_width: u16,
}

impl<'a> MapView<'a> {
    pub fn new(grid: &'a Grid, cell_width: u16) -> Self {
        Self { grid, cell_width }
    }

    /// The area tiles are drawn into, inside the border.
    pub fn inner_area(area: Rect) -> Rect {
        Self::block().inner(area)
    }

    fn block() -> Block<'static> {
        Block::bordered().title("Map")
    }

    fn row_line(&self, row: &[Tile]) -> Line<'static> {
        let width = self.cell_width as usize;
        let spans: Vec<Span> = row
            .iter()
            .map(|&tile| Span::styled(format!("{:<width$}", tile.symbol()), tile_style(tile)))
            .collect();
        Line::from(spans)
    }
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Self::inner_area(area);
        frame.render_widget(Self::block(), area);

        let lines: Vec<Line> = self
            .grid
            .rows()
            .iter()
            .take(inner.height as usize)
            .map(|row| self.row_line(row))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Terminal color for a tile.
pub fn tile_color(tile: Tile) -> Color {
    let (r, g, b) = tile.color();
    Color::Rgb(r, g, b)
}

/// Symbol on the tile's color. Floor is black, so its label is drawn in gray.
pub fn tile_style(tile: Tile) -> Style {
    let fg = match tile {
        Tile::Floor => Color::Gray,
        _ => Color::Black,
    };
    Style::default().bg(tile_color(tile)).fg(fg)
}

/// Map a screen cell to a grid coordinate.
///
/// Returns `None` outside `inner`. Coordinates past the grid's own width or
/// height are returned as-is; `Grid::place_tile` ignores them.
pub fn hit_test(inner: Rect, cell_width: u16, col: u16, row: u16) -> Option<Position> {
    if col < inner.x || row < inner.y || col >= inner.right() || row >= inner.bottom() {
        return None;
    }
    let x = (col - inner.x) / cell_width.max(1);
    let y = row - inner.y;
    Some(Position::new(x as usize, y as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_tiles_with_colors() {
        let mut grid = Grid::create_empty(5, 4).unwrap();
        grid.place_tile(2, 2, Tile::Player);

        let backend = TestBackend::new(14, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MapView::new(&grid, 2).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();

        // Top-left wall sits just inside the border
        let wall = &buffer[(1, 1)];
        assert_eq!(wall.symbol(), "1");
        assert_eq!(wall.bg, Color::Rgb(255, 255, 255));
        // Second column of the same tile is padding in the same color
        assert_eq!(buffer[(2, 1)].symbol(), " ");
        assert_eq!(buffer[(2, 1)].bg, Color::Rgb(255, 255, 255));

        // Tile (2, 2) starts at column 1 + 2 * 2
        let player = &buffer[(5, 3)];
        assert_eq!(player.symbol(), "P");
        assert_eq!(player.bg, Color::Rgb(0, 255, 0));

        let floor = &buffer[(3, 2)];
        assert_eq!(floor.symbol(), "0");
        assert_eq!(floor.bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_large_map_is_clipped() {
        let grid = Grid::create_empty(40, 30).unwrap();
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MapView::new(&grid, 1).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        // Interior floor of the big map shows through
        assert_eq!(buffer[(2, 2)].symbol(), "0");
    }

    #[test]
    fn test_hit_test_maps_columns_by_cell_width() {
        let inner = Rect::new(1, 2, 20, 5);
        assert_eq!(hit_test(inner, 2, 1, 2), Some(Position::new(0, 0)));
        assert_eq!(hit_test(inner, 2, 2, 2), Some(Position::new(0, 0)));
        assert_eq!(hit_test(inner, 2, 3, 2), Some(Position::new(1, 0)));
        assert_eq!(hit_test(inner, 2, 8, 4), Some(Position::new(3, 2)));
        assert_eq!(hit_test(inner, 1, 8, 4), Some(Position::new(7, 2)));
    }

    #[test]
    fn test_hit_test_outside_viewport() {
        let inner = Rect::new(1, 2, 20, 5);
        assert_eq!(hit_test(inner, 2, 0, 3), None);
        assert_eq!(hit_test(inner, 2, 5, 1), None);
        assert_eq!(hit_test(inner, 2, 21, 3), None);
        assert_eq!(hit_test(inner, 2, 5, 7), None);
    }
}
