//! # Tiles
//!
//! The closed set of symbols a map cell can hold, plus the coordinate type
//! used for the unique Player/Exit markers.

use std::fmt;

/// A single map cell. Each variant has a one-character symbol used by the
/// `.ber` file format and a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Player,
    Collectible,
    Exit,
}

impl Tile {
    /// Legend order: 1, 0, P, C, E.
    pub const ALL: [Tile; 5] = [
        Tile::Wall,
        Tile::Floor,
        Tile::Player,
        Tile::Collectible,
        Tile::Exit,
    ];

    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '1',
            Tile::Floor => '0',
            Tile::Player => 'P',
            Tile::Collectible => 'C',
            Tile::Exit => 'E',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(Tile::Wall),
            '0' => Some(Tile::Floor),
            'P' => Some(Tile::Player),
            'C' => Some(Tile::Collectible),
            'E' => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Wall => "Wall",
            Tile::Floor => "Floor",
            Tile::Player => "Player",
            Tile::Collectible => "Collectible",
            Tile::Exit => "Exit",
        }
    }

    /// Display color as an RGB triple.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Tile::Wall => (255, 255, 255),
            Tile::Floor => (0, 0, 0),
            Tile::Player => (0, 255, 0),
            Tile::Collectible => (255, 255, 0),
            Tile::Exit => (255, 0, 0),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Column/row coordinate inside a grid. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tile_symbol_maps_back() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_symbol(tile.symbol()), Some(tile));
        }
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        assert_eq!(Tile::from_symbol('X'), None);
        assert_eq!(Tile::from_symbol('p'), None);
        assert_eq!(Tile::from_symbol(' '), None);
    }

    #[test]
    fn test_legend_order() {
        let symbols: String = Tile::ALL.iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, "10PCE");
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut colors: Vec<_> = Tile::ALL.iter().map(|t| t.color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Tile::ALL.len());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }
}
