//! Headless turn driver (default binary).
//!
//! Stands in for the presentation layer: it resolves "clicks" by picking
//! the first clickable group, acknowledges every phase animation
//! immediately, and prints the events the engine emits, either as text or
//! as JSON lines for piping into other tools.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use tile_blast::core::groups;
use tile_blast::{BoardCoordinator, BoardEvent, Coord, LevelConfig, Phase, ShuffleOutcome};

#[derive(Debug)]
struct DriverArgs {
    seed: u32,
    turns: u32,
    level_path: Option<String>,
    json: bool,
}

const USAGE: &str = "usage: tile-blast [--seed N] [--turns N] [--level PATH] [--json]";

fn parse_args(args: &[String]) -> Result<DriverArgs> {
    let mut parsed = DriverArgs {
        seed: 1,
        turns: 10,
        level_path: None,
        json: false,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                parsed.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--turns" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --turns"))?;
                parsed.turns = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --turns value: {}", v))?;
            }
            "--level" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --level"))?;
                parsed.level_path = Some(v.clone());
            }
            "--json" => {
                parsed.json = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(&std::env::args().skip(1).collect::<Vec<_>>())?;
    let config = match &args.level_path {
        Some(path) => LevelConfig::load(path)?,
        None => LevelConfig::default(),
    };

    let mut coordinator = BoardCoordinator::new(config, args.seed)?;
    // Board creation can already emit events (initial tiers, a rescue
    // shuffle on a dead roll).
    print_events(&mut coordinator, args.json)?;

    for turn in 1..=args.turns {
        let Some(target) = first_clickable(&coordinator) else {
            if !args.json {
                println!("no clickable group left after turn {}", turn - 1);
            }
            break;
        };

        if !args.json {
            println!("turn {}: click ({}, {})", turn, target.row, target.col);
        }
        if !coordinator.on_click(target) {
            return Err(anyhow!("engine rejected a click it advertised"));
        }
        print_events(&mut coordinator, args.json)?;

        while coordinator.phase() != Phase::Idle {
            coordinator.on_phase_animation_done();
            if coordinator.phase() == Phase::Shuffling && !args.json {
                match coordinator.last_shuffle_outcome() {
                    Some(ShuffleOutcome::Guaranteed) => println!("  reshuffled (move guaranteed)"),
                    Some(ShuffleOutcome::NoGuarantee) => {
                        println!("  reshuffled without guarantee, board may stay dead");
                    }
                    None => {}
                }
            }
            print_events(&mut coordinator, args.json)?;
        }
    }

    Ok(())
}

/// First cell of the first clickable group, scanning row-major.
fn first_clickable(coordinator: &BoardCoordinator) -> Option<Coord> {
    groups::find_all_groups(coordinator.board())
        .into_iter()
        .find(|group| group.len() >= 2)
        .map(|group| group[0])
}

fn print_events(coordinator: &mut BoardCoordinator, json: bool) -> Result<()> {
    for event in coordinator.drain_events() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
            continue;
        }
        match event {
            BoardEvent::BlockRemoved { cell } => {
                println!("  removed ({}, {})", cell.row, cell.col);
            }
            BoardEvent::BlockMoved { from, to } => {
                println!(
                    "  moved ({}, {}) -> ({}, {})",
                    from.row, from.col, to.row, to.col
                );
            }
            BoardEvent::BlockSpawned { cell, color } => {
                println!(
                    "  spawned ({}, {}) color {}",
                    cell.row,
                    cell.col,
                    color.index()
                );
            }
            BoardEvent::ComboTierChanged { cell, tier } => {
                println!(
                    "  tier ({}, {}) -> {}",
                    cell.row,
                    cell.col,
                    tier.index()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let args = parse_args(&[]).unwrap();
        assert_eq!(args.seed, 1);
        assert_eq!(args.turns, 10);
        assert!(args.level_path.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_parse_args_full() {
        let args = parse_args(&to_args(&[
            "--seed", "77", "--turns", "3", "--level", "level.json", "--json",
        ]))
        .unwrap();
        assert_eq!(args.seed, 77);
        assert_eq!(args.turns, 3);
        assert_eq!(args.level_path.as_deref(), Some("level.json"));
        assert!(args.json);
    }

    #[test]
    fn test_parse_args_rejects_garbage() {
        assert!(parse_args(&to_args(&["--seed"])).is_err());
        assert!(parse_args(&to_args(&["--seed", "x"])).is_err());
        assert!(parse_args(&to_args(&["--frobnicate"])).is_err());
    }
}
