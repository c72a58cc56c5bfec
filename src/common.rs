//! Common types for the simulator: board, random-source and simulation errors.

/// Errors returned when a board's chute/ladder layout is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Goal must be at least 1.
    InvalidGoal,
    /// A start or end square lies outside `[1, goal]`.
    SquareOutOfRange { square: u32 },
    /// Ladder end is not above its start.
    LadderNotAscending { start: u32, end: u32 },
    /// Chute end is not below its start.
    ChuteNotDescending { start: u32, end: u32 },
    /// The same start square was declared twice.
    DuplicateStart { square: u32 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidGoal => write!(f, "Goal must be at least 1"),
            BoardError::SquareOutOfRange { square } => {
                write!(f, "Square {} is outside the board", square)
            }
            BoardError::LadderNotAscending { start, end } => {
                write!(f, "Ladder {}->{} does not climb", start, end)
            }
            BoardError::ChuteNotDescending { start, end } => {
                write!(f, "Chute {}->{} does not descend", start, end)
            }
            BoardError::DuplicateStart { square } => {
                write!(f, "Square {} starts more than one chute or ladder", square)
            }
        }
    }
}

/// Errors returned by a [`RandomSource`](crate::RandomSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// A finite source has no numbers left.
    Exhausted,
    /// A scripted die value outside `1..=6`.
    InvalidRoll { value: u64 },
}

impl core::fmt::Display for RandomError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RandomError::Exhausted => write!(f, "No more numbers in list"),
            RandomError::InvalidRoll { value } => {
                write!(f, "Value {} is not a valid die roll", value)
            }
        }
    }
}

/// Errors returned by [`Simulation`](crate::Simulation) construction and play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    Board(BoardError),
    Random(RandomError),
    /// A roster with no players can never produce a winner.
    EmptyRoster,
    /// Without `std` there is no entropy source to fall back on.
    SeedRequired,
}

impl From<BoardError> for SimError {
    fn from(err: BoardError) -> Self {
        SimError::Board(err)
    }
}

impl From<RandomError> for SimError {
    fn from(err: RandomError) -> Self {
        SimError::Random(err)
    }
}

impl core::fmt::Display for SimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SimError::Board(e) => write!(f, "Board error: {}", e),
            SimError::Random(e) => write!(f, "Random source error: {}", e),
            SimError::EmptyRoster => write!(f, "Player roster is empty"),
            SimError::SeedRequired => write!(f, "A seed is required without std"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for RandomError {}
#[cfg(feature = "std")]
impl std::error::Error for SimError {}
