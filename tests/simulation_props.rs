use chutes::{Board, PlayerKind, Simulation};
use proptest::prelude::*;

fn roster_strategy() -> impl Strategy<Value = Vec<PlayerKind>> {
    let kind = prop_oneof![
        Just(PlayerKind::Standard),
        (0u32..6).prop_map(|extra_steps| PlayerKind::Resilient { extra_steps }),
        (0u32..6).prop_map(|dropped_steps| PlayerKind::Lazy { dropped_steps }),
    ];
    prop::collection::vec(kind, 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tallies_match_games_and_roster(
        seed in any::<u64>(),
        roster in roster_strategy(),
        games in 1usize..20,
        randomize in any::<bool>(),
    ) {
        let mut sim = Simulation::builder(roster.clone())
            .seed(seed)
            .randomize_players(randomize)
            .build()
            .unwrap();
        sim.run_simulation(games).unwrap();

        prop_assert_eq!(sim.get_results().len(), games);
        prop_assert_eq!(sim.winners_per_type().values().sum::<usize>(), games);
        prop_assert_eq!(sim.players_per_type().values().sum::<usize>(), roster.len());
        for result in sim.get_results() {
            prop_assert!(roster.contains(&result.winner));
            prop_assert!(result.turns >= 1);
            prop_assert!(result.turns < 1000);
        }
    }

    /// Without chutes nobody moves backward, so every game ends within
    /// `goal` rounds and no sooner than `goal / 6` rounds.
    #[test]
    fn chute_free_games_are_bounded(
        seed in any::<u64>(),
        roster in roster_strategy(),
        goal in 1u32..60,
    ) {
        let ladders: Vec<(u32, u32)> = if goal > 10 { vec![(3, goal - 2)] } else { vec![] };
        let board = Board::new(&ladders, &[], goal).unwrap();
        let mut sim = Simulation::builder(roster)
            .board(board)
            .seed(seed)
            .build()
            .unwrap();
        let result = sim.single_game().unwrap();
        prop_assert!(result.turns <= goal);
        if ladders.is_empty() {
            prop_assert!(result.turns >= goal.div_ceil(6));
        }
    }

    #[test]
    fn identical_seeds_replay_identically(seed in any::<u64>(), roster in roster_strategy()) {
        let mut a = Simulation::builder(roster.clone()).seed(seed).build().unwrap();
        let mut b = Simulation::builder(roster).seed(seed).build().unwrap();
        a.run_simulation(5).unwrap();
        b.run_simulation(5).unwrap();
        prop_assert_eq!(a.get_results(), b.get_results());
    }
}
