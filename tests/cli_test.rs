use std::process::Command;

#[test]
fn test_simulate_json_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_chutes"))
        .args([
            "simulate",
            "--games",
            "25",
            "--seed",
            "12345",
            "--players",
            "player,player,lazy",
            "--json",
        ])
        .env("CHUTES_LOG", "off")
        .output()
        .expect("failed to run chutes binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 25);
    assert_eq!(v["players_per_type"]["Player"], 2);
    assert_eq!(v["players_per_type"]["LazyPlayer"], 1);
    assert!(v["players_per_type"].get("ResilientPlayer").is_none());
}

#[test]
fn test_single_game_reports_winner() {
    let output = Command::new(env!("CARGO_BIN_EXE_chutes"))
        .args(["single", "--seed", "42", "--randomize"])
        .env("CHUTES_LOG", "off")
        .output()
        .expect("failed to run chutes binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("won after"));
}

#[test]
fn test_unknown_player_type_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_chutes"))
        .args(["simulate", "--players", "cheater"])
        .output()
        .expect("failed to run chutes binary");
    assert!(!output.status.success());
}
