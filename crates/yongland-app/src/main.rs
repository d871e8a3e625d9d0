//! YONGLAND - headless runner for Bert Yong vs Fraud Yong.
//!
//! # Usage
//!
//! ```bash
//! yongland --autoplay                 # bot plays one game as fast as possible
//! yongland --autoplay --realtime      # same, paced at 60Hz on the game loop thread
//! yongland --seed 7 --ticks 600 --json
//! ```
//!
//! Set `RUST_LOG=debug` to see every gameplay event.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use yongland_app::autopilot::Autopilot;
use yongland_app::game_loop::{self, TICK_DURATION};
use yongland_core::commands::PlayerCommand;
use yongland_core::enums::ScenePhase;
use yongland_core::state::GameStateSnapshot;
use yongland_sim::{SimConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "yongland")]
#[command(author, version, about = "Bert Yong vs Fraud Yong - headless simulation runner")]
struct Args {
    /// RNG seed; the same seed and inputs replay the same game
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum number of ticks to run (60 per simulated second)
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Simulation speed multiplier for --realtime (0 to 4)
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Run on the paced game loop thread instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Let the built-in bot play
    #[arg(long)]
    autoplay: bool,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.ticks == 0 {
        bail!("--ticks must be at least 1");
    }

    let config = SimConfig {
        seed: args.seed,
        time_scale: args.time_scale,
    };
    config.validate().context("invalid --time-scale")?;

    tracing::info!(seed = args.seed, ticks = args.ticks, realtime = args.realtime, "starting");

    let started = Instant::now();
    let snapshot = if args.realtime {
        run_realtime(&args, config)?
    } else {
        run_headless(&args, config)?
    };
    tracing::info!(elapsed = ?started.elapsed(), "finished");

    report(&snapshot, args.json)
}

/// Step the engine directly, as fast as possible.
fn run_headless(args: &Args, config: SimConfig) -> Result<GameStateSnapshot> {
    let mut engine = SimulationEngine::try_new(config).context("invalid simulation config")?;
    let mut autopilot = args.autoplay.then(Autopilot::new);

    if autopilot.is_none() {
        engine.queue_command(PlayerCommand::Start);
    }

    let mut snapshot = engine.tick();
    while snapshot.time.tick < args.ticks && snapshot.scene != ScenePhase::GameOver {
        if let Some(bot) = autopilot.as_mut() {
            engine.queue_commands(bot.next_commands(&snapshot));
        }
        let next = engine.tick();
        // Menu ticks do not advance time; bail out if nothing ever starts.
        if next.scene == ScenePhase::Menu && snapshot.scene == ScenePhase::Menu {
            bail!("game never left the menu");
        }
        snapshot = next;
    }
    Ok(snapshot)
}

/// Drive the paced game loop thread and poll its snapshots.
fn run_realtime(args: &Args, config: SimConfig) -> Result<GameStateSnapshot> {
    let handle = game_loop::spawn_game_loop(config)?;
    let mut autopilot = args.autoplay.then(Autopilot::new);

    if autopilot.is_none() {
        handle.send(PlayerCommand::Start)?;
    }

    let mut last_seen_tick = None;
    let snapshot = loop {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = handle.latest() else {
            continue;
        };
        if snapshot.time.tick >= args.ticks || snapshot.scene == ScenePhase::GameOver {
            break snapshot;
        }
        if !handle.is_running() {
            bail!("game loop stopped unexpectedly");
        }
        // Only react once per engine tick.
        if last_seen_tick == Some((snapshot.scene, snapshot.time.tick)) {
            continue;
        }
        last_seen_tick = Some((snapshot.scene, snapshot.time.tick));
        if let Some(bot) = autopilot.as_mut() {
            for command in bot.next_commands(&snapshot) {
                handle.send(command)?;
            }
        }
    };

    handle.shutdown()?;
    Ok(snapshot)
}

fn report(snapshot: &GameStateSnapshot, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(snapshot).context("failed to encode snapshot")?;
        println!("{text}");
        return Ok(());
    }

    println!("scene:   {:?}", snapshot.scene);
    println!("time:    {:.2}s ({} ticks)", snapshot.time.elapsed_secs, snapshot.time.tick);
    match snapshot.result {
        Some(result) => {
            println!("outcome: {:?}", result.outcome);
            println!("score:   {}", result.score);
            println!("kills:   {}", result.kills);
        }
        None => {
            let hud = &snapshot.hud;
            println!("lives:   {}", hud.lives);
            println!("score:   {}", hud.score);
            println!("minis:   {}/{}", hud.minis_total - hud.minis_remaining, hud.minis_total);
            if let Some(hits) = hud.giant_hits {
                println!("giant:   {}/{}", hits, hud.giant_hits_required);
            }
        }
    }
    Ok(())
}
