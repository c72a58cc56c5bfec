#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use chutes::{PlayerKind, Simulation};
    use serde_json::json;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut sim = Simulation::builder(vec![
        PlayerKind::Standard,
        PlayerKind::resilient(),
        PlayerKind::lazy(),
    ])
    .seed(seed)
    .build()?;
    sim.run_simulation(games)?;

    let result = json!({
        "seed": seed,
        "games": games,
        "results": sim.get_results(),
        "winners_per_type": sim.winners_per_type(),
        "durations_per_type": sim.durations_per_type(),
        "players_per_type": sim.players_per_type(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
