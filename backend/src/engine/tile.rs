use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl TileColor {
    /// Colors a tile can be dealt.
    pub const PALETTE: [TileColor; 5] = [
        TileColor::Red,
        TileColor::Blue,
        TileColor::Green,
        TileColor::Yellow,
        TileColor::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Blue => "blue",
            TileColor::Green => "green",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
        }
    }

    /// Single-letter form used when drawing the grid in a terminal.
    pub fn symbol(&self) -> char {
        match self {
            TileColor::Red => 'R',
            TileColor::Blue => 'B',
            TileColor::Green => 'G',
            TileColor::Yellow => 'Y',
            TileColor::Purple => 'P',
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: usize,
    #[serde(rename = "type")]
    pub color: TileColor,
}
