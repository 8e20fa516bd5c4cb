use crate::engine::tile::{Tile, TileColor};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;

pub const BOARD_SIDE: usize = 8;
pub const TILE_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Deals an 8x8 board, each tile colored uniformly from the palette.
    /// Tile ids follow row-major order starting at 0.
    pub fn generate(rng: &mut StdRng) -> Self {
        let mut tiles = Vec::with_capacity(TILE_COUNT);

        for id in 0..TILE_COUNT {
            let color = TileColor::PALETTE.choose(rng).copied().unwrap_or_default();
            tiles.push(Tile { id, color });
        }

        Self { tiles }
    }

    pub fn random() -> Self {
        let mut rng = StdRng::seed_from_u64(rand::random());
        Self::generate(&mut rng)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(BOARD_SIDE)
    }
}

/// One line per row, prefixed with the id of the row's first tile.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let first_id = row.first().map(|tile| tile.id).unwrap_or_default();
            write!(f, "{:>2} |", first_id)?;
            for tile in row {
                write!(f, " {}", tile.color.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_board(seed: u64) -> Board {
        Board::generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_board_creation() {
        let board = seeded_board(7);
        assert_eq!(board.len(), 64);

        for (index, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.id, index);
            assert!(TileColor::PALETTE.contains(&tile.color));
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(seeded_board(42).tiles(), seeded_board(42).tiles());
    }

    #[test]
    fn test_colors_vary() {
        let board = seeded_board(1);
        let first = board.tiles()[0].color;
        assert!(board.tiles().iter().any(|tile| tile.color != first));
    }

    #[test]
    fn test_tile_lookup() {
        let board = seeded_board(3);
        assert_eq!(board.tile(63).map(|t| t.id), Some(63));
        assert!(board.tile(64).is_none());
    }

    #[test]
    fn test_render_grid() {
        let board = seeded_board(5);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), BOARD_SIDE);
        assert!(lines[0].starts_with(" 0 |"));
        assert!(lines[7].starts_with("56 |"));

        let first_row: Vec<&str> = lines[0]
            .split('|')
            .nth(1)
            .unwrap()
            .split_whitespace()
            .collect();
        assert_eq!(first_row.len(), BOARD_SIDE);
        assert_eq!(first_row[0], board.tiles()[0].color.symbol().to_string());
    }
}
