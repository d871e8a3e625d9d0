//! Scene state machine.
//!
//! The game moves Menu → Playing → GameOver → Menu. Only the Playing scene
//! owns a world; everything in it is dropped when the scene ends, and only
//! the final tally carries over.

use hecs::{Entity, World};
use rand::Rng;

use yongland_core::components::{Body, Goal, Player};
use yongland_core::constants::*;
use yongland_core::enums::{EnemyKind, Outcome, ScenePhase};
use yongland_core::events::GameEvent;
use yongland_core::input::InputState;
use yongland_core::state::GameResult;
use yongland_core::types::{Aabb, Position};

use crate::combat::Tally;
use crate::scheduler::{DelayedAction, Scheduler};
use crate::systems;
use crate::systems::lives::LifeLoss;
use crate::world_setup;

/// The active scene.
pub enum Scene {
    Menu,
    Playing(Box<PlayScene>),
    GameOver(GameResult),
}

impl Scene {
    pub fn phase(&self) -> ScenePhase {
        match self {
            Scene::Menu => ScenePhase::Menu,
            Scene::Playing(_) => ScenePhase::Playing,
            Scene::GameOver(_) => ScenePhase::GameOver,
        }
    }
}

/// A requested change of scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition {
    ToPlaying,
    ToGameOver(GameResult),
    ToMenu,
}

/// Everything that exists while a game is in progress.
pub struct PlayScene {
    pub world: World,
    pub player: Entity,
    pub tally: Tally,
    pub scheduler: Scheduler,
    pub banner: Option<String>,
    pub giant_spawned: bool,
    /// Set once the outcome is decided; the world stops simulating.
    pub finished: Option<Outcome>,
    despawn_buffer: Vec<Entity>,
}

impl PlayScene {
    /// Build the level and its cast.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut world = World::new();
        let player = world_setup::setup_level(&mut world, rng);
        Self {
            world,
            player,
            tally: Tally::default(),
            scheduler: Scheduler::default(),
            banner: None,
            giant_spawned: false,
            finished: None,
            despawn_buffer: Vec::new(),
        }
    }

    /// Run one tick of gameplay.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        input: &InputState,
        rng: &mut R,
        now_tick: u64,
        events: &mut Vec<GameEvent>,
    ) -> Option<SceneTransition> {
        if self.finished.is_none() {
            systems::invulnerability::run(&mut self.world);
            systems::player_control::run(&mut self.world, input.intent());
            systems::enemy_ai::run(&mut self.world, rng);
            systems::arcade::run(&mut self.world);

            let report = systems::collision::run(&mut self.world, &mut self.tally, events);
            if report.life_loss == Some(LifeLoss::OutOfLives) {
                return Some(self.defeat(events));
            }
            for kind in report.defeated {
                self.on_enemy_defeated(kind, now_tick, events);
            }

            if self.finished.is_none() && self.touching_goal() {
                events.push(GameEvent::GoalReached);
                self.victory(now_tick, events);
            }

            if self.finished.is_none()
                && systems::lives::check_fall_out(&mut self.world, events)
                    == Some(LifeLoss::OutOfLives)
            {
                return Some(self.defeat(events));
            }

            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        }

        self.run_scheduled(rng, now_tick, events)
    }

    pub fn result(&self, outcome: Outcome) -> GameResult {
        GameResult {
            outcome,
            score: self.tally.score(),
            kills: self.tally.kills,
        }
    }

    fn on_enemy_defeated(&mut self, kind: EnemyKind, now_tick: u64, events: &mut Vec<GameEvent>) {
        match kind {
            EnemyKind::Mini => {
                if self.tally.minis_defeated >= MINI_COUNT
                    && !self.giant_spawned
                    && !self.scheduler.is_scheduled(DelayedAction::SpawnGiant)
                {
                    self.scheduler.schedule_in(
                        now_tick,
                        GIANT_SPAWN_DELAY_SECS,
                        DelayedAction::SpawnGiant,
                    );
                }
            }
            EnemyKind::Giant => {
                if self.finished.is_none() {
                    self.victory(now_tick, events);
                }
            }
        }
    }

    fn touching_goal(&self) -> bool {
        let Some(player_box) = self
            .world
            .query::<(&Player, &Position, &Body)>()
            .iter()
            .next()
            .map(|(_, (_, pos, body))| Aabb::from_center(*pos, body.half))
        else {
            return false;
        };

        self.world
            .query::<(&Goal, &Position)>()
            .iter()
            .any(|(_, (goal, pos))| Aabb::from_center(*pos, goal.half).overlaps(&player_box))
    }

    fn victory(&mut self, now_tick: u64, events: &mut Vec<GameEvent>) {
        self.tally.award(SCORE_VICTORY_BONUS);
        self.finished = Some(Outcome::Victory);
        self.scheduler
            .schedule_in(now_tick, VICTORY_DELAY_SECS, DelayedAction::FinishVictory);
        events.push(GameEvent::GameWon {
            score: self.tally.score(),
        });
        tracing::info!(score = self.tally.score(), kills = self.tally.kills, "level won");
    }

    fn defeat(&mut self, events: &mut Vec<GameEvent>) -> SceneTransition {
        self.finished = Some(Outcome::Defeat);
        events.push(GameEvent::GameLost {
            score: self.tally.score(),
        });
        tracing::info!(score = self.tally.score(), kills = self.tally.kills, "out of lives");
        SceneTransition::ToGameOver(self.result(Outcome::Defeat))
    }

    fn run_scheduled<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now_tick: u64,
        events: &mut Vec<GameEvent>,
    ) -> Option<SceneTransition> {
        let mut transition = None;
        for action in self.scheduler.drain_due(now_tick) {
            match action {
                DelayedAction::SpawnGiant => {
                    if self.finished.is_some() || self.giant_spawned {
                        continue;
                    }
                    world_setup::spawn_giant(&mut self.world, rng);
                    self.giant_spawned = true;
                    self.banner = Some(GIANT_BANNER_TEXT.to_string());
                    self.scheduler
                        .schedule_in(now_tick, BANNER_DURATION_SECS, DelayedAction::HideBanner);
                    events.push(GameEvent::GiantAppeared);
                    tracing::debug!("giant spawned");
                }
                DelayedAction::HideBanner => {
                    self.banner = None;
                }
                DelayedAction::FinishVictory => {
                    transition = Some(SceneTransition::ToGameOver(self.result(Outcome::Victory)));
                }
            }
        }
        transition
    }
}
