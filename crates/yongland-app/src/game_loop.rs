//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use yongland_core::constants::TICK_RATE;
use yongland_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, GameLoopHandle, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> Result<GameLoopHandle> {
    let engine = SimulationEngine::try_new(config).context("invalid simulation config")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));

    let shared = Arc::clone(&latest_snapshot);
    let thread = std::thread::Builder::new()
        .name("yongland-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &shared);
        })
        .context("failed to spawn game loop thread")?;

    Ok(GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<yongland_core::state::GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();
    tracing::info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(tick = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        for event in &snapshot.events {
            tracing::debug!(?event, tick = snapshot.time.tick, "game event");
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind; reset to avoid catch-up spiral
            tracing::warn!("game loop fell behind; skipping catch-up");
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yongland_core::commands::PlayerCommand;
    use yongland_core::enums::ScenePhase;
    use yongland_core::state::GameStateSnapshot;

    /// Poll the published snapshot until `pred` holds or five seconds pass.
    fn wait_for(
        handle: &GameLoopHandle,
        pred: impl Fn(&GameStateSnapshot) -> bool,
    ) -> Option<GameStateSnapshot> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(snap) = handle.latest().filter(|snap| pred(snap)) {
                return Some(snap);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_handle_commands_reach_the_engine() {
        let handle = spawn_game_loop(SimConfig {
            time_scale: 4.0,
            ..Default::default()
        })
        .unwrap();

        handle.send(PlayerCommand::Start).unwrap();
        handle.send(PlayerCommand::Pause).unwrap();
        let paused = wait_for(&handle, |snap| {
            snap.scene == ScenePhase::Playing && snap.paused
        })
        .expect("start then pause should show up in the snapshot");

        std::thread::sleep(Duration::from_millis(50));
        let still = handle.latest().unwrap();
        assert!(still.paused);
        assert_eq!(still.time.tick, paused.time.tick, "paused games do not advance");

        handle.send(PlayerCommand::Resume).unwrap();
        let resumed = wait_for(&handle, |snap| {
            !snap.paused && snap.time.tick > paused.time.tick
        });
        assert!(resumed.is_some(), "resume should restart the clock");

        handle.shutdown().unwrap();
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut engine = SimulationEngine::new(SimConfig::default());

        engine.queue_command(PlayerCommand::Start);
        let snap = engine.tick();
        assert_eq!(snap.scene, ScenePhase::Playing);

        engine.queue_command(PlayerCommand::Pause);
        let snap = engine.tick();
        assert!(snap.paused);
        let paused_tick = snap.time.tick;

        // Tick while paused: time should not advance
        let snap = engine.tick();
        assert_eq!(snap.time.tick, paused_tick);

        engine.queue_command(PlayerCommand::Resume);
        let snap = engine.tick();
        assert!(!snap.paused);
        assert!(snap.time.tick > paused_tick);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = spawn_game_loop(SimConfig {
            time_scale: f64::NAN,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_game_loop_thread_runs_and_shuts_down() {
        let handle = spawn_game_loop(SimConfig {
            time_scale: 4.0,
            ..Default::default()
        })
        .unwrap();
        handle.send(PlayerCommand::Start).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut reached_playing = false;
        while Instant::now() < deadline {
            if handle
                .latest()
                .is_some_and(|snap| snap.scene == ScenePhase::Playing && snap.time.tick > 5)
            {
                reached_playing = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(reached_playing, "game loop should start the game");
        assert!(handle.is_running());
        handle.shutdown().unwrap();
    }
}
