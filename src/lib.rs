#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod rng;
mod simulation;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use rng::*;
pub use simulation::*;
