pub mod board;
pub mod game;
pub mod tile;

pub use board::Board;
pub use game::{Game, GameError};
pub use tile::{Tile, TileColor};
