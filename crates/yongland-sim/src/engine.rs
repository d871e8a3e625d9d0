//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the active scene, processes player commands,
//! runs the scene each tick, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use yongland_core::commands::PlayerCommand;
use yongland_core::constants::MAX_TIME_SCALE;
use yongland_core::enums::ScenePhase;
use yongland_core::events::GameEvent;
use yongland_core::input::InputState;
use yongland_core::state::GameStateSnapshot;
use yongland_core::types::SimTime;

use crate::error::ConfigError;
use crate::scene::{PlayScene, Scene, SceneTransition};
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

impl SimConfig {
    /// Check the config before building an engine from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::InvalidTimeScale {
                value: self.time_scale,
                max: MAX_TIME_SCALE,
            });
        }
        Ok(())
    }
}

/// The simulation engine. Owns the scene and all sim state.
pub struct SimulationEngine {
    scene: Scene,
    time: SimTime,
    time_scale: f64,
    paused: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// An out-of-range time scale is clamped; use [`SimulationEngine::try_new`]
    /// to reject it instead.
    pub fn new(config: SimConfig) -> Self {
        let time_scale = if config.time_scale.is_finite() {
            config.time_scale.clamp(0.0, MAX_TIME_SCALE)
        } else {
            1.0
        };
        Self {
            scene: Scene::Menu,
            time: SimTime::default(),
            time_scale,
            paused: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputState::default(),
            events: Vec::new(),
        }
    }

    /// Create a new simulation engine, rejecting an invalid config.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused {
            if let Scene::Playing(play) = &mut self.scene {
                let transition =
                    play.update(&self.input, &mut self.rng, self.time.tick, &mut self.events);
                self.time.advance();
                if let Some(transition) = transition {
                    self.apply_transition(transition);
                }
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.scene, &self.time, self.paused, events)
    }

    /// Get the current scene phase.
    pub fn phase(&self) -> ScenePhase {
        self.scene.phase()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the playing scene, if a game is in progress (for tests).
    #[cfg(test)]
    pub fn play_scene(&self) -> Option<&PlayScene> {
        match &self.scene {
            Scene::Playing(play) => Some(&**play),
            _ => None,
        }
    }

    /// Get the playing scene mutably, if a game is in progress (for tests).
    #[cfg(test)]
    pub fn play_scene_mut(&mut self) -> Option<&mut PlayScene> {
        match &mut self.scene {
            Scene::Playing(play) => Some(&mut **play),
            _ => None,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that do not apply to the
    /// current scene are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => {
                self.input.set_key(key, true);
                if key.is_confirm() {
                    match self.scene.phase() {
                        ScenePhase::Menu => self.apply_transition(SceneTransition::ToPlaying),
                        ScenePhase::GameOver => self.apply_transition(SceneTransition::ToMenu),
                        ScenePhase::Playing => {}
                    }
                }
            }
            PlayerCommand::KeyUp { key } => {
                self.input.set_key(key, false);
            }
            PlayerCommand::TouchDown { button } => {
                self.input.set_touch(button, true);
            }
            PlayerCommand::TouchUp { button } => {
                self.input.set_touch(button, false);
            }
            PlayerCommand::Start => {
                if matches!(self.scene, Scene::Menu) {
                    self.apply_transition(SceneTransition::ToPlaying);
                }
            }
            PlayerCommand::Restart => {
                if matches!(self.scene, Scene::GameOver(_)) {
                    self.apply_transition(SceneTransition::ToMenu);
                }
            }
            PlayerCommand::Pause => {
                if matches!(self.scene, Scene::Playing(_)) {
                    self.paused = true;
                }
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
            }
        }
    }

    /// Swap scenes, dropping everything the old scene owned.
    fn apply_transition(&mut self, transition: SceneTransition) {
        let from = self.scene.phase();
        self.scene = match transition {
            SceneTransition::ToPlaying => {
                self.time = SimTime::default();
                Scene::Playing(Box::new(PlayScene::new(&mut self.rng)))
            }
            SceneTransition::ToGameOver(result) => Scene::GameOver(result),
            SceneTransition::ToMenu => Scene::Menu,
        };
        self.paused = false;
        self.input.clear();

        let to = self.scene.phase();
        self.events.push(GameEvent::SceneChanged { from, to });
        tracing::info!(?from, ?to, tick = self.time.tick, "scene changed");
    }
}
