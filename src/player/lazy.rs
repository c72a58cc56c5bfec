use crate::{board::Board, common::RandomError, config, rng::RandomSource};

use super::{apply_adjustment, Player, PlayerKind};

/// Player who slacks off on the move right after climbing a ladder.
///
/// The dropped steps come off the die roll, but never push the player below
/// where the move started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyPlayer {
    position: u32,
    turns: u32,
    dropped_steps: u32,
    ladder_last: bool,
}

impl LazyPlayer {
    /// Negative values are taken as their magnitude.
    pub fn new(dropped_steps: i32) -> Self {
        Self::with_dropped_steps(dropped_steps.unsigned_abs())
    }

    pub(crate) fn with_dropped_steps(dropped_steps: u32) -> Self {
        Self {
            position: 0,
            turns: 0,
            dropped_steps,
            ladder_last: false,
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn dropped_steps(&self) -> u32 {
        self.dropped_steps
    }
}

impl Default for LazyPlayer {
    fn default() -> Self {
        Self::with_dropped_steps(config::DEFAULT_DROPPED_STEPS)
    }
}

impl Player for LazyPlayer {
    fn make_move(
        &mut self,
        board: &Board,
        rng: &mut dyn RandomSource,
    ) -> Result<(), RandomError> {
        let roll = rng.roll_die()?;
        let start = self.position;
        let intermediate = if self.ladder_last {
            start
                .saturating_add(roll)
                .saturating_sub(self.dropped_steps)
                .max(start)
        } else {
            start.saturating_add(roll)
        };
        self.position = apply_adjustment(intermediate, board.position_adjustment(intermediate));
        self.ladder_last = self.position > intermediate;
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
        PlayerKind::Lazy {
            dropped_steps: self.dropped_steps,
        }
    }
}
