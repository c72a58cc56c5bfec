use crate::{board::Board, common::RandomError, rng::RandomSource};

use super::{apply_adjustment, Player, PlayerKind};

/// Baseline player: roll, move, follow the chute or ladder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardPlayer {
    position: u32,
    turns: u32,
}

impl StandardPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `position` instead of 0.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }
}

impl Player for StandardPlayer {
    fn make_move(
        &mut self,
        board: &Board,
        rng: &mut dyn RandomSource,
    ) -> Result<(), RandomError> {
        let roll = rng.roll_die()?;
        self.position = self.position.saturating_add(roll);
        self.position = apply_adjustment(self.position, board.position_adjustment(self.position));
        self.turns += 1;
        Ok(())
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn turns(&self) -> u32 {
        self.turns
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Standard
    }
}
