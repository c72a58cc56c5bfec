use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{
    board::Board,
    common::SimError,
    player::{Player, PlayerKind},
    rng::RandomSource,
};

/// Outcome of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    /// Turns taken by the winner.
    pub turns: u32,
    pub winner: PlayerKind,
}

impl GameResult {
    pub fn winner_name(&self) -> &'static str {
        self.winner.name()
    }
}

/// Plays games between a fixed roster of player kinds and keeps every result.
///
/// All draws come from the one random source the simulation owns, in strict
/// move order, so a seeded simulation replays identically.
pub struct Simulation<R = SmallRng> {
    board: Board,
    player_field: Vec<PlayerKind>,
    rng: R,
    results: Vec<GameResult>,
}

/// Builder for a [`Simulation`] driven by `SmallRng`.
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    player_field: Vec<PlayerKind>,
    board: Option<Board>,
    seed: Option<u64>,
    randomize_players: bool,
}

impl SimulationBuilder {
    pub fn new(player_field: Vec<PlayerKind>) -> Self {
        Self {
            player_field,
            board: None,
            seed: None,
            randomize_players: false,
        }
    }

    /// Play on `board` instead of the standard board.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Seed the random source for reproducible games.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shuffle the roster once when the simulation is built.
    pub fn randomize_players(mut self, randomize: bool) -> Self {
        self.randomize_players = randomize;
        self
    }

    pub fn build(mut self) -> Result<Simulation<SmallRng>, SimError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => SmallRng::from_rng(&mut rand::rng()),
            #[cfg(not(feature = "std"))]
            None => return Err(SimError::SeedRequired),
        };
        if self.randomize_players {
            self.player_field.shuffle(&mut rng);
        }
        Simulation::with_source(self.player_field, self.board.unwrap_or_default(), rng)
    }
}

impl Simulation<SmallRng> {
    /// Unseeded simulation on the standard board.
    pub fn new(player_field: Vec<PlayerKind>) -> Result<Self, SimError> {
        SimulationBuilder::new(player_field).build()
    }

    pub fn builder(player_field: Vec<PlayerKind>) -> SimulationBuilder {
        SimulationBuilder::new(player_field)
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Create a simulation drawing from an explicit random source.
    /// The roster is played in the order given.
    pub fn with_source(
        player_field: Vec<PlayerKind>,
        board: Board,
        rng: R,
    ) -> Result<Self, SimError> {
        if player_field.is_empty() {
            return Err(SimError::EmptyRoster);
        }
        Ok(Self {
            board,
            player_field,
            rng,
            results: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Roster in playing order.
    pub fn player_field(&self) -> &[PlayerKind] {
        &self.player_field
    }

    /// Play one game with fresh players and report the winner.
    ///
    /// The goal is checked after every single move, so within a round the
    /// player earlier in the roster wins.
    pub fn single_game(&mut self) -> Result<GameResult, SimError> {
        let mut players: Vec<Box<dyn Player>> =
            self.player_field.iter().map(PlayerKind::spawn).collect();
        loop {
            for player in players.iter_mut() {
                player.make_move(&self.board, &mut self.rng)?;
                if self.board.goal_reached(player.position()) {
                    let result = GameResult {
                        turns: player.turns(),
                        winner: player.kind(),
                    };
                    log::debug!(
                        "{} won after {} turns",
                        result.winner_name(),
                        result.turns
                    );
                    return Ok(result);
                }
            }
        }
    }

    /// Play `num_games` games, appending each result to the log.
    pub fn run_simulation(&mut self, num_games: usize) -> Result<(), SimError> {
        self.results.reserve(num_games);
        for _ in 0..num_games {
            let result = self.single_game()?;
            self.results.push(result);
        }
        log::info!(
            "Simulated {} games ({} total)",
            num_games,
            self.results.len()
        );
        Ok(())
    }

    /// Every result recorded so far, in the order games were played.
    pub fn get_results(&self) -> &[GameResult] {
        &self.results
    }

    /// Wins per behavior kind. Kinds in the roster that never won map to 0.
    pub fn winners_per_type(&self) -> BTreeMap<&'static str, usize> {
        let mut wins = self.roster_keys(|| 0);
        for result in &self.results {
            *wins.entry(result.winner_name()).or_insert(0) += 1;
        }
        wins
    }

    /// Turn counts of the games each kind won, in recording order.
    pub fn durations_per_type(&self) -> BTreeMap<&'static str, Vec<u32>> {
        let mut durations = self.roster_keys(Vec::new);
        for result in &self.results {
            durations
                .entry(result.winner_name())
                .or_default()
                .push(result.turns);
        }
        durations
    }

    /// How many roster entries there are of each kind.
    pub fn players_per_type(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for kind in &self.player_field {
            *counts.entry(kind.name()).or_insert(0) += 1;
        }
        counts
    }

    fn roster_keys<V>(&self, init: impl Fn() -> V) -> BTreeMap<&'static str, V> {
        self.player_field
            .iter()
            .map(|kind| (kind.name(), init()))
            .collect()
    }
}
