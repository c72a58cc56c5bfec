//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, GameResult, LazyPlayer, Player, PlayerKind, RandomSource, ResilientPlayer, SimError,
    Simulation, StandardPlayer,
};
