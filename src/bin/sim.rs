use gridfleet::{Board, Combatant, Match, MatchConfig, Outcome, Side, STANDARD_FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    gridfleet::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // placement uses per-player seeds, the shared match rng mixes both
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let mut match_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));

    let mut b1 = Board::with_placement_lock();
    let mut b2 = Board::with_placement_lock();
    b1.place_fleet_randomly(&mut rng1, &STANDARD_FLEET)?;
    b2.place_fleet_randomly(&mut rng2, &STANDARD_FLEET)?;

    let config = MatchConfig::default();
    let mut game = Match::new(
        Combatant::with_board("player1", b1),
        Combatant::with_board("player2", b2),
        config,
    );
    let outcome = game.play(&mut match_rng);

    let winner = match outcome {
        Outcome::Winner(Side::First) => Some("player1"),
        Outcome::Winner(Side::Second) => Some("player2"),
        Outcome::Draw => None,
    };
    let hits = |side: Side| {
        game.history()
            .iter()
            .filter(|s| s.attacker == side && s.result.is_hit())
            .count()
    };

    let result = json!({
        "config": config,
        "rounds": game.rounds(),
        "player1": {"shots": game.first().shots_fired(), "hits": hits(Side::First)},
        "player2": {"shots": game.second().shots_fired(), "hits": hits(Side::Second)},
        "outcome": outcome,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
