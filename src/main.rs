#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{generate_fleet, init_logging, play_game, Engine, PlacedShip, TargetFleet};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Print a randomly generated fleet layout.
    Fleet {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play the engine against freshly generated fleets and report shot counts.
    Play {
        #[arg(long, default_value_t = 1)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn fleet_json(fleet: &[PlacedShip]) -> anyhow::Result<serde_json::Value> {
    let mut ships = Vec::with_capacity(fleet.len());
    for ship in fleet {
        let start = ship.start_external().map_err(|e| anyhow::anyhow!(e))?;
        let end = ship.end_external().map_err(|e| anyhow::anyhow!(e))?;
        ships.push(json!({
            "ship": ship.class().name(),
            "start": start.to_string(),
            "end": end.to_string(),
        }));
    }
    Ok(serde_json::Value::Array(ships))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fleet { seed } => {
            let mut engine = Engine::new(make_rng(seed));
            let fleet = engine.generate_fleet().map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string_pretty(&fleet_json(&fleet)?)?);
        }
        Commands::Play { games, seed } => {
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (games will be reproducible)", s);
            }
            let mut engine = Engine::new(make_rng(seed));
            // Opponent layouts come from their own generator so the engine's
            // draws do not depend on them.
            let mut fleet_rng = make_rng(seed.map(|s| s.wrapping_add(1)));

            let mut shots = Vec::with_capacity(games);
            for game in 1..=games {
                let layout = generate_fleet(&mut fleet_rng).map_err(|e| anyhow::anyhow!(e))?;
                let mut target = TargetFleet::new(layout).map_err(|e| anyhow::anyhow!(e))?;
                let summary = play_game(&mut engine, &mut target).map_err(|e| anyhow::anyhow!(e))?;
                log::info!("game {}: {} shots", game, summary.shots);
                shots.push(summary.shots);
            }

            let mean = if shots.is_empty() {
                0.0
            } else {
                shots.iter().sum::<usize>() as f64 / shots.len() as f64
            };
            let best = shots.iter().min().copied();
            let worst = shots.iter().max().copied();
            let result = json!({
                "games": shots.len(),
                "shots": shots,
                "mean_shots": mean,
                "best": best,
                "worst": worst,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}
