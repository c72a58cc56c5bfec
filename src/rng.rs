//! Die-roll sources.
//!
//! Every draw a game makes goes through a [`RandomSource`], so a game is fully
//! reproducible from the source it was handed. `SmallRng` is the default;
//! [`LcgRand`] and [`ListRand`] are small deterministic sources for pinned
//! scenarios and tests.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::RandomError;
use crate::config::DIE_SIDES;

/// A uniform source of die rolls.
pub trait RandomSource {
    /// Uniform draw in `0..upper`. Returns 0 without drawing when `upper <= 1`.
    fn next_below(&mut self, upper: u32) -> Result<u32, RandomError>;

    /// Uniform die roll in `1..=6`.
    fn roll_die(&mut self) -> Result<u32, RandomError> {
        Ok(self.next_below(DIE_SIDES)? + 1)
    }
}

impl RandomSource for SmallRng {
    fn next_below(&mut self, upper: u32) -> Result<u32, RandomError> {
        if upper <= 1 {
            return Ok(0);
        }
        Ok(self.random_range(0..upper))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, upper: u32) -> Result<u32, RandomError> {
        (**self).next_below(upper)
    }

    fn roll_die(&mut self) -> Result<u32, RandomError> {
        (**self).roll_die()
    }
}

const LCG_MULTIPLIER: u64 = 16_807; // 7^5
const LCG_MODULUS: u64 = (1 << 31) - 1;

/// Park–Miller linear congruential generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcgRand {
    state: u64,
}

impl LcgRand {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    /// Advance the generator and return the new state.
    pub fn rand(&mut self) -> u64 {
        self.state = (LCG_MULTIPLIER * self.state) % LCG_MODULUS;
        self.state
    }
}

impl RandomSource for LcgRand {
    fn next_below(&mut self, upper: u32) -> Result<u32, RandomError> {
        if upper <= 1 {
            return Ok(0);
        }
        Ok((self.rand() % upper as u64) as u32)
    }
}

/// Finite source replaying a fixed list of numbers.
///
/// Running past the end is an error, not a wrap-around, so tests notice
/// when a game consumes more draws than scripted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRand {
    numbers: Vec<u64>,
    index: usize,
}

impl ListRand {
    pub fn new(numbers: Vec<u64>) -> Self {
        Self { numbers, index: 0 }
    }

    /// Next number in the list.
    pub fn rand(&mut self) -> Result<u64, RandomError> {
        let value = *self.numbers.get(self.index).ok_or(RandomError::Exhausted)?;
        self.index += 1;
        Ok(value)
    }

    /// Numbers not yet drawn.
    pub fn remaining(&self) -> usize {
        self.numbers.len() - self.index
    }
}

impl RandomSource for ListRand {
    fn next_below(&mut self, upper: u32) -> Result<u32, RandomError> {
        if upper <= 1 {
            return Ok(0);
        }
        Ok((self.rand()? % upper as u64) as u32)
    }

    /// List entries are die faces and are returned verbatim.
    fn roll_die(&mut self) -> Result<u32, RandomError> {
        let value = self.rand()?;
        if (1..=DIE_SIDES as u64).contains(&value) {
            Ok(value as u32)
        } else {
            Err(RandomError::InvalidRoll { value })
        }
    }
}
