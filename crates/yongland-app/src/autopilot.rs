//! Scripted player for unattended runs.
//!
//! Reads the latest snapshot, picks the nearest enemy (or the goal once the
//! field is clear), and holds the keys that steer Bert toward it. Emits
//! key-down / key-up commands only when the held set changes, the same way
//! a real keyboard would. Fully deterministic: no randomness, no clock.

use yongland_core::commands::PlayerCommand;
use yongland_core::enums::{Key, ScenePhase};
use yongland_core::state::{GameStateSnapshot, PlayerView};
use yongland_core::types::Position;

/// Horizontal distance within which the bot stops steering.
const ARRIVE_DISTANCE: f64 = 6.0;
/// Horizontal distance within which the bot jumps to land on a target.
const POUNCE_DISTANCE: f64 = 70.0;
/// A target this far above the player makes the bot jump to climb.
const CLIMB_HEIGHT: f64 = 60.0;

/// Keys the autopilot is holding down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldKeys {
    left: bool,
    right: bool,
    jump: bool,
}

/// Deterministic bot that turns snapshots into player commands.
#[derive(Debug, Default)]
pub struct Autopilot {
    held: HeldKeys,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to send before the next tick, given the last snapshot seen.
    pub fn next_commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.scene {
            ScenePhase::Menu => {
                self.held = HeldKeys::default();
                vec![PlayerCommand::Start]
            }
            ScenePhase::GameOver => {
                self.held = HeldKeys::default();
                Vec::new()
            }
            ScenePhase::Playing => {
                if snapshot.paused {
                    return Vec::new();
                }
                let wanted = snapshot
                    .player
                    .as_ref()
                    .map(|player| desired_keys(player, pick_target(player, snapshot)))
                    .unwrap_or_default();
                self.transition_to(wanted)
            }
        }
    }

    fn transition_to(&mut self, wanted: HeldKeys) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        for (was, now, key) in [
            (self.held.left, wanted.left, Key::Left),
            (self.held.right, wanted.right, Key::Right),
            (self.held.jump, wanted.jump, Key::Up),
        ] {
            match (was, now) {
                (false, true) => commands.push(PlayerCommand::KeyDown { key }),
                (true, false) => commands.push(PlayerCommand::KeyUp { key }),
                _ => {}
            }
        }
        self.held = wanted;
        commands
    }
}

/// Nearest live enemy, or the goal when none are left.
fn pick_target(player: &PlayerView, snapshot: &GameStateSnapshot) -> Option<Position> {
    snapshot
        .enemies
        .iter()
        .map(|enemy| enemy.position)
        .min_by(|a, b| {
            player
                .position
                .distance_to(a)
                .total_cmp(&player.position.distance_to(b))
        })
        .or_else(|| snapshot.goal.as_ref().map(|goal| goal.position))
}

fn desired_keys(player: &PlayerView, target: Option<Position>) -> HeldKeys {
    let Some(target) = target else {
        return HeldKeys::default();
    };

    let dx = target.x - player.position.x;
    let dy = target.y - player.position.y;

    let left = dx < -ARRIVE_DISTANCE;
    let right = dx > ARRIVE_DISTANCE;
    let jump = player.resting && (dx.abs() < POUNCE_DISTANCE || dy < -CLIMB_HEIGHT);

    HeldKeys { left, right, jump }
}
