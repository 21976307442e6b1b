//! Headless monster AI simulator.
//!
//! Loads a scenario and AI tuning from the data directory, then runs the turn
//! loop with the player standing still, logging what every monster does.
//!
//! ```bash
//! DUNGEON_SCENARIO=crypt DUNGEON_TURNS=30 RUST_LOG=debug cargo run -p dungeon-sim
//! ```

mod config;
mod render;

use ai_content::{ConfigLoader, ContentFactory};
use ai_runtime::{LevelSnapshot, SnapshotStore, TurnDriver, build_level};
use anyhow::{Context, Result};

use config::SimConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    run(&config)
}

fn run(config: &SimConfig) -> Result<()> {
    let factory = ContentFactory::new(&config.data_dir);
    let ai_config = match &config.ai_config {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };
    let scenario = factory
        .load_scenario(&config.scenario)
        .with_context(|| format!("loading scenario '{}'", config.scenario))?;
    let (mut level, mut player) = build_level(&scenario)
        .with_context(|| format!("building scenario '{}'", scenario.name))?;

    let seed = config.seed.unwrap_or(scenario.seed);
    tracing::info!(
        scenario = %scenario.name,
        seed,
        turns = config.turns,
        monsters = level.monsters().len(),
        "starting simulation"
    );

    let mut driver = TurnDriver::new(ai_config, seed);
    let mut damage_taken = 0;
    let mut gold_lost = 0;
    for _ in 0..config.turns {
        let summary = driver.run_turn(&mut level, &mut player);
        damage_taken += summary.damage_dealt();
        gold_lost += summary.gold_stolen();
        if !player.is_alive() {
            tracing::info!(turn = summary.turn, "player was killed");
            break;
        }
        if level.active_count() == 0 {
            tracing::info!(turn = summary.turn, "no monsters left");
            break;
        }
    }

    tracing::info!(
        turns = driver.turn(),
        damage_taken,
        gold_lost,
        health = player.health(),
        "simulation finished"
    );

    if let Some(dir) = &config.snapshot_dir {
        let store = SnapshotStore::new(dir)
            .with_context(|| format!("opening snapshot directory {}", dir.display()))?;
        store
            .save(&scenario.name, &LevelSnapshot::capture(&level, driver.turn()))
            .context("saving final snapshot")?;
    }

    if config.render {
        println!("{}", render::render(&level, &player));
    }

    Ok(())
}
