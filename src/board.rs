//! Board layout: chutes, ladders and the goal square.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::BoardError;
use crate::config::{STANDARD_CHUTES, STANDARD_GOAL, STANDARD_LADDERS};

/// Immutable chute/ladder layout.
///
/// Adjustments are precomputed into a table indexed by square, so
/// [`Board::position_adjustment`] is a single lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    ladders: Vec<(u32, u32)>,
    chutes: Vec<(u32, u32)>,
    goal: u32,
    adjustments: Vec<i32>,
}

impl Board {
    /// Build and validate a board from (start, end) pairs.
    pub fn new(
        ladders: &[(u32, u32)],
        chutes: &[(u32, u32)],
        goal: u32,
    ) -> Result<Self, BoardError> {
        if goal == 0 {
            return Err(BoardError::InvalidGoal);
        }
        let mut adjustments = vec![0i32; goal as usize + 1];

        for &(start, end) in ladders {
            check_squares(start, end, goal)?;
            if end <= start {
                return Err(BoardError::LadderNotAscending { start, end });
            }
            insert_jump(&mut adjustments, start, end)?;
        }
        for &(start, end) in chutes {
            check_squares(start, end, goal)?;
            if end >= start {
                return Err(BoardError::ChuteNotDescending { start, end });
            }
            insert_jump(&mut adjustments, start, end)?;
        }

        Ok(Board {
            ladders: ladders.to_vec(),
            chutes: chutes.to_vec(),
            goal,
            adjustments,
        })
    }

    /// The standard 90-square board.
    pub fn standard() -> Self {
        Board {
            ladders: STANDARD_LADDERS.to_vec(),
            chutes: STANDARD_CHUTES.to_vec(),
            goal: STANDARD_GOAL,
            adjustments: standard_adjustments(),
        }
    }

    pub fn ladders(&self) -> &[(u32, u32)] {
        &self.ladders
    }

    pub fn chutes(&self) -> &[(u32, u32)] {
        &self.chutes
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Returns `true` for any position at or beyond the goal.
    pub fn goal_reached(&self, position: u32) -> bool {
        position >= self.goal
    }

    /// Signed move caused by the chute or ladder starting at `position`,
    /// or 0 when none starts there.
    pub fn position_adjustment(&self, position: u32) -> i32 {
        self.adjustments
            .get(position as usize)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

fn check_squares(start: u32, end: u32, goal: u32) -> Result<(), BoardError> {
    if start == 0 || start > goal {
        return Err(BoardError::SquareOutOfRange { square: start });
    }
    if end == 0 || end > goal {
        return Err(BoardError::SquareOutOfRange { square: end });
    }
    Ok(())
}

fn insert_jump(adjustments: &mut [i32], start: u32, end: u32) -> Result<(), BoardError> {
    let slot = &mut adjustments[start as usize];
    if *slot != 0 {
        return Err(BoardError::DuplicateStart { square: start });
    }
    *slot = end as i32 - start as i32;
    Ok(())
}

fn standard_adjustments() -> Vec<i32> {
    let mut adjustments = vec![0i32; STANDARD_GOAL as usize + 1];
    for &(start, end) in STANDARD_LADDERS.iter().chain(STANDARD_CHUTES.iter()) {
        adjustments[start as usize] = end as i32 - start as i32;
    }
    adjustments
}
