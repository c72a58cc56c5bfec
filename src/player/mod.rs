//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - StandardPlayer: rolls and follows chutes and ladders
//! - ResilientPlayer: takes extra steps on the move after a chute
//! - LazyPlayer: drops steps on the move after a ladder, never moving backward
//!
//! A roster is a list of [`PlayerKind`]s; each game spawns fresh players from it.

use alloc::boxed::Box;

use crate::{board::Board, common::RandomError, config, rng::RandomSource};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Tracking its own position and number of turns taken
/// - Turning a die roll into a new position on the board
pub trait Player {
    /// Roll once, move, and follow any chute or ladder.
    ///
    /// The die is drawn before any state changes, so a failed draw leaves the
    /// player untouched.
    fn make_move(
        &mut self,
        board: &Board,
        rng: &mut dyn RandomSource,
    ) -> Result<(), RandomError>;

    fn position(&self) -> u32;

    fn turns(&self) -> u32;

    /// Behavior this player was spawned from.
    fn kind(&self) -> PlayerKind;
}

/// Roster entry naming a player behavior and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Standard,
    Resilient { extra_steps: u32 },
    Lazy { dropped_steps: u32 },
}

impl PlayerKind {
    pub const NAMES: [&'static str; 3] = ["Player", "ResilientPlayer", "LazyPlayer"];

    /// Resilient player with the default number of extra steps.
    pub const fn resilient() -> Self {
        PlayerKind::Resilient {
            extra_steps: config::DEFAULT_EXTRA_STEPS,
        }
    }

    /// Lazy player with the default number of dropped steps.
    pub const fn lazy() -> Self {
        PlayerKind::Lazy {
            dropped_steps: config::DEFAULT_DROPPED_STEPS,
        }
    }

    /// Behavior-kind name used to key aggregated results.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerKind::Standard => Self::NAMES[0],
            PlayerKind::Resilient { .. } => Self::NAMES[1],
            PlayerKind::Lazy { .. } => Self::NAMES[2],
        }
    }

    /// Fresh player at position 0 with no turns taken.
    pub fn spawn(&self) -> Box<dyn Player> {
        match *self {
            PlayerKind::Standard => Box::new(StandardPlayer::new()),
            PlayerKind::Resilient { extra_steps } => Box::new(ResilientPlayer::new(extra_steps)),
            PlayerKind::Lazy { dropped_steps } => {
                Box::new(LazyPlayer::with_dropped_steps(dropped_steps))
            }
        }
    }
}

/// Apply a board adjustment; adjustments never leave the board.
fn apply_adjustment(position: u32, adjustment: i32) -> u32 {
    position.saturating_add_signed(adjustment)
}

pub mod lazy;
pub mod resilient;
pub mod standard;

pub use lazy::LazyPlayer;
pub use resilient::ResilientPlayer;
pub use standard::StandardPlayer;
