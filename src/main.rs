use std::collections::BTreeSet;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use gridfleet::{
    init_logging, init_logging_at, Board, Combatant, Coordinate, Match, MatchConfig, Outcome,
    Resolution, SimultaneousLoss, Side, STANDARD_FLEET,
};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log level (error, warn, info, debug, trace); overrides GRIDFLEET_LOG"
    )]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ResolutionArg {
    PerAttack,
    PerRound,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DoubleSinkArg {
    Draw,
    First,
    Second,
}

#[derive(Parser)]
enum Commands {
    /// Play a random-targeting match between two randomly placed fleets.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = ResolutionArg::PerRound)]
        resolution: ResolutionArg,
        #[arg(long, value_enum, default_value_t = DoubleSinkArg::Draw, help = "Verdict when both fleets sink in the same check")]
        double_sink: DoubleSinkArg,
        #[arg(long, help = "Reject vessel placement once a board has been attacked")]
        lock_placement: bool,
    },
    /// Fire at a single board and report each result.
    Attack {
        #[arg(long, help = "Fix RNG seed for the random fleet")]
        seed: Option<u64>,
        #[arg(
            long = "vessel",
            value_name = "KIND,ORIGIN,ORIENTATION",
            help = "Place a vessel instead of a random fleet (e.g., --vessel cruiser,C5,horizontal)"
        )]
        vessels: Vec<String>,
        /// Coordinates to attack, e.g. C5 J10.
        #[arg(required = true)]
        targets: Vec<String>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (match will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn fleet_board(rng: &mut SmallRng, lock: bool) -> anyhow::Result<Board> {
    let mut board = if lock {
        Board::with_placement_lock()
    } else {
        Board::new()
    };
    board
        .place_fleet_randomly(rng, &STANDARD_FLEET)
        .context("random fleet placement failed")?;
    Ok(board)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.log_level {
        Some(level) => init_logging_at(level),
        None => init_logging(),
    }

    match cli.command {
        Commands::Simulate {
            seed,
            resolution,
            double_sink,
            lock_placement,
        } => {
            let mut rng = make_rng(seed);
            let config = MatchConfig {
                resolution: match resolution {
                    ResolutionArg::PerAttack => Resolution::PerAttack,
                    ResolutionArg::PerRound => Resolution::PerRound,
                },
                simultaneous_loss: match double_sink {
                    DoubleSinkArg::Draw => SimultaneousLoss::Draw,
                    DoubleSinkArg::First => SimultaneousLoss::FirstAttackerWins,
                    DoubleSinkArg::Second => SimultaneousLoss::SecondAttackerWins,
                },
            };
            let first = Combatant::with_board("player1", fleet_board(&mut rng, lock_placement)?);
            let second = Combatant::with_board("player2", fleet_board(&mut rng, lock_placement)?);

            let mut game = Match::new(first, second, config);
            let outcome = game.play(&mut rng);

            println!("Match finished after {} rounds.", game.rounds());
            for side in [Side::First, Side::Second] {
                let c = game.combatant(side);
                println!(
                    "  {}: {} shots fired, {} of {} vessels afloat",
                    c.name(),
                    c.shots_fired(),
                    c.board().vessels_afloat(),
                    c.board().vessel_count()
                );
            }
            match outcome {
                Outcome::Winner(side) => println!("Winner: {}", game.combatant(side).name()),
                Outcome::Draw => println!("Draw: both fleets were sunk in the same round."),
            }
        }
        Commands::Attack {
            seed,
            vessels,
            targets,
        } => {
            let mut rng = make_rng(seed);
            let mut defender = if vessels.is_empty() {
                Combatant::with_board("defender", fleet_board(&mut rng, false)?)
            } else {
                let mut c = Combatant::new("defender");
                for spec in &vessels {
                    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
                    let &[kind, origin, orientation] = parts.as_slice() else {
                        return Err(anyhow!(
                            "vessel '{}' must be KIND,ORIGIN,ORIENTATION",
                            spec
                        ));
                    };
                    c.board_mut()
                        .place_vessel_str(kind, origin, orientation)
                        .with_context(|| format!("cannot place vessel '{}'", spec))?;
                }
                c
            };
            let mut attacker = Combatant::new("attacker");

            let mut struck = BTreeSet::new();
            for target in &targets {
                match attacker.attack_str(&mut defender, target) {
                    Ok(result) => {
                        println!("{:>4}: {:?}", target, result);
                        if result.is_hit() {
                            struck.insert(target.parse::<Coordinate>()?);
                        }
                    }
                    Err(e) => println!("{:>4}: {}", target, e),
                }
            }

            let board = defender.board();
            let hits = struck.len();
            println!(
                "{} valid shots, {} distinct cells hit, {} of {} vessels afloat.",
                attacker.shots_fired(),
                hits,
                board.vessels_afloat(),
                board.vessel_count()
            );
            if defender.has_lost() {
                println!("All vessels sunk.");
            }
        }
    }
    Ok(())
}
