pub const STANDARD_GOAL: u32 = 90;
pub const NUM_LADDERS: usize = 7;
pub const NUM_CHUTES: usize = 7;

/// Standard ladders as (start, end).
pub const STANDARD_LADDERS: [(u32, u32); NUM_LADDERS] = [
    (1, 40),
    (8, 10),
    (36, 52),
    (43, 62),
    (49, 79),
    (65, 82),
    (68, 85),
];

/// Standard chutes as (start, end).
pub const STANDARD_CHUTES: [(u32, u32); NUM_CHUTES] = [
    (24, 5),
    (33, 3),
    (42, 30),
    (56, 37),
    (64, 27),
    (74, 12),
    (87, 70),
];

pub const DIE_SIDES: u32 = 6;

/// Extra steps a resilient player takes after sliding down a chute.
pub const DEFAULT_EXTRA_STEPS: u32 = 1;
/// Steps a lazy player drops right after climbing a ladder.
pub const DEFAULT_DROPPED_STEPS: u32 = 1;
