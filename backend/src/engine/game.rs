use crate::engine::board::Board;
use thiserror::Error;
use tracing::debug;

/// Points added for every click, whatever tile was hit.
pub const CLICK_POINTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No tile with id {0}")]
    UnknownTile(usize),
}

pub struct Game {
    board: Board,
    score: u32,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self { board, score: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_display(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Scores a click on `tile_id` and returns the new score.
    ///
    /// There is no matching rule: any tile on the board is worth the same and
    /// stays in place.
    pub fn click(&mut self, tile_id: usize) -> Result<u32, GameError> {
        let tile = self
            .board
            .tile(tile_id)
            .ok_or(GameError::UnknownTile(tile_id))?;

        self.score = self.score.saturating_add(CLICK_POINTS);
        debug!(tile = tile_id, color = %tile.color, score = self.score, "tile clicked");
        Ok(self.score)
    }
}
