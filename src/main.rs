#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use chutes::{init_logging, Board, PlayerKind, Simulation};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Player,
    Resilient,
    Lazy,
}

#[derive(Args)]
#[cfg(feature = "std")]
struct RosterArgs {
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [PlayerType::Player, PlayerType::Resilient, PlayerType::Lazy],
        help = "Comma-separated player behaviors, one entry per player"
    )]
    players: Vec<PlayerType>,
    #[arg(long, default_value_t = chutes::DEFAULT_EXTRA_STEPS)]
    extra_steps: u32,
    #[arg(long, default_value_t = chutes::DEFAULT_DROPPED_STEPS as i32, allow_negative_numbers = true)]
    dropped_steps: i32,
    #[arg(long, help = "Shuffle the roster once before playing")]
    randomize: bool,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play many games on the standard board and report statistics.
    Simulate {
        #[command(flatten)]
        roster: RosterArgs,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },
    /// Play a single game and report the winner.
    Single {
        #[command(flatten)]
        roster: RosterArgs,
    },
}

#[cfg(feature = "std")]
impl RosterArgs {
    fn player_field(&self) -> Vec<PlayerKind> {
        self.players
            .iter()
            .map(|p| match p {
                PlayerType::Player => PlayerKind::Standard,
                PlayerType::Resilient => PlayerKind::Resilient {
                    extra_steps: self.extra_steps,
                },
                PlayerType::Lazy => PlayerKind::Lazy {
                    dropped_steps: self.dropped_steps.unsigned_abs(),
                },
            })
            .collect()
    }

    fn build(&self) -> anyhow::Result<Simulation> {
        let mut builder = Simulation::builder(self.player_field())
            .board(Board::standard())
            .randomize_players(self.randomize);
        if let Some(s) = self.seed {
            log::info!("Using fixed seed: {} (simulation will be reproducible)", s);
            builder = builder.seed(s);
        }
        Ok(builder.build()?)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            roster,
            games,
            json,
        } => {
            let mut sim = roster.build()?;
            sim.run_simulation(games)?;
            if json {
                print_json(&sim)?;
            } else {
                print_summary(&sim);
            }
        }
        Commands::Single { roster } => {
            let mut sim = roster.build()?;
            let result = sim.single_game()?;
            println!(
                "{} won after {} turns",
                result.winner_name(),
                result.turns
            );
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_summary(sim: &Simulation) {
    let wins = sim.winners_per_type();
    let durations = sim.durations_per_type();
    let roster = sim.players_per_type();

    println!("Games played: {}", sim.get_results().len());
    println!("{:<16} {:>7} {:>6} {:>10}", "Type", "Players", "Wins", "Mean turns");
    for (name, count) in &roster {
        let won = wins.get(name).copied().unwrap_or(0);
        let mean = durations
            .get(name)
            .filter(|d| !d.is_empty())
            .map(|d| d.iter().map(|&t| t as f64).sum::<f64>() / d.len() as f64);
        match mean {
            Some(mean) => println!("{:<16} {:>7} {:>6} {:>10.2}", name, count, won, mean),
            None => println!("{:<16} {:>7} {:>6} {:>10}", name, count, won, "-"),
        }
    }
}

#[cfg(feature = "std")]
fn print_json(sim: &Simulation) -> anyhow::Result<()> {
    let summary = json!({
        "games": sim.get_results().len(),
        "players_per_type": sim.players_per_type(),
        "winners_per_type": sim.winners_per_type(),
        "durations_per_type": sim.durations_per_type(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
