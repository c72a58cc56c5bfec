use crate::{board::Board, common::RandomError, config, rng::RandomSource};

use super::{apply_adjustment, Player, PlayerKind};

/// Player who makes up for a chute by taking extra steps on the next move.
///
/// The bonus applies only to the move immediately after a chute and is added
/// before chutes and ladders are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResilientPlayer {
    position: u32,
    turns: u32,
    extra_steps: u32,
    chute_last: bool,
}

impl ResilientPlayer {
    pub fn new(extra_steps: u32) -> Self {
        Self {
            position: 0,
            turns: 0,
            extra_steps,
            chute_last: false,
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn extra_steps(&self) -> u32 {
        self.extra_steps
    }
}

impl Default for ResilientPlayer {
    fn default() -> Self {
        Self::new(config::DEFAULT_EXTRA_STEPS)
    }
}

impl Player for ResilientPlayer {
    fn make_move(
        &mut self,
        board: &Board,
        rng: &mut dyn RandomSource,
    ) -> Result<(), RandomError> {
        let roll = rng.roll_die()?;
        self.position = self.position.saturating_add(roll);
        if self.chute_last {
            self.position = self.position.saturating_add(self.extra_steps);
            self.chute_last = false;
        }
        let pre_adjust = self.position;
        self.position = apply_adjustment(self.position, board.position_adjustment(self.position));
        if self.position < pre_adjust {
            self.chute_last = true;
        }
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
        PlayerKind::Resilient {
            extra_steps: self.extra_steps,
        }
    }
}
