use std::process::Command;

fn gridfleet(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_gridfleet"))
        .args(args)
        .output()
        .expect("failed to run gridfleet binary");
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    (output.status.success(), stdout)
}

#[test]
fn test_simulate_with_fixed_seed() {
    let (ok, out) = gridfleet(&["simulate", "--seed", "12345"]);
    assert!(ok);
    assert!(out.contains("Match finished after"));
    let (_, again) = gridfleet(&["simulate", "--seed", "12345"]);
    assert_eq!(out, again, "same seed should replay the same match");
}

#[test]
fn test_attack_manual_fleet() {
    let (ok, out) = gridfleet(&[
        "attack",
        "--vessel",
        "destroyer,A1,horizontal",
        "A1",
        "K2",
        "A2",
    ]);
    assert!(ok);
    assert!(out.contains("A1: Hit"));
    assert!(out.contains("K2: Invalid coordinate"));
    assert!(out.contains("All vessels sunk."));
}

#[test]
fn test_attack_rejects_bad_vessel() {
    let (ok, _) = gridfleet(&["attack", "--vessel", "cruiser,I1,vertical", "A1"]);
    assert!(!ok);
}

#[test]
fn test_attack_counts_repeated_hit_once() {
    let (ok, out) = gridfleet(&[
        "attack",
        "--vessel",
        "cruiser,C5,horizontal",
        "C5",
        "c5",
        "A1",
    ]);
    assert!(ok);
    assert!(out.contains("3 valid shots, 1 distinct cells hit"), "{out}");
    assert!(!out.contains("All vessels sunk."));
}

#[test]
fn test_log_level_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_gridfleet"))
        .args([
            "--log-level",
            "debug",
            "attack",
            "--vessel",
            "destroyer,A1,horizontal",
            "A1",
            "A2",
        ])
        .output()
        .expect("failed to run gridfleet binary");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("DEBUG board: placed destroyer #0 at A1 horizontal"), "{stderr}");
    assert!(stderr.contains("INFO  board: destroyer #0 sunk by attack at A2"), "{stderr}");

    let (ok, _) = gridfleet(&["--log-level", "chatty", "attack", "A1"]);
    assert!(!ok, "unknown level is rejected");
}
