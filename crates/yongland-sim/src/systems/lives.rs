//! Life loss and respawn.

use hecs::{Entity, World};

use yongland_core::components::{Invulnerability, Lives, Player};
use yongland_core::constants::{FALL_OUT_MARGIN, WORLD_HEIGHT};
use yongland_core::enums::LifeLossCause;
use yongland_core::events::GameEvent;
use yongland_core::types::Position;

use crate::world_setup;

/// What happened when the player was asked to give up a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// The player was invulnerable (or already out of lives).
    Ignored,
    /// A life was spent and the player is back at the respawn point.
    Respawned,
    /// The last life was spent.
    OutOfLives,
}

/// Take one life from the player. Respawns while lives remain.
pub fn lose_life(
    world: &mut World,
    player: Entity,
    cause: LifeLossCause,
    events: &mut Vec<GameEvent>,
) -> LifeLoss {
    let invulnerable = world
        .get::<&Invulnerability>(player)
        .map(|inv| inv.active)
        .unwrap_or(false);
    if invulnerable {
        return LifeLoss::Ignored;
    }

    let lives_remaining = {
        let Ok(mut lives) = world.get::<&mut Lives>(player) else {
            return LifeLoss::Ignored;
        };
        if lives.remaining == 0 {
            return LifeLoss::Ignored;
        }
        lives.remaining -= 1;
        lives.remaining
    };

    events.push(GameEvent::LifeLost {
        cause,
        lives_remaining,
    });
    tracing::debug!(?cause, lives_remaining, "life lost");

    if lives_remaining == 0 {
        return LifeLoss::OutOfLives;
    }

    world_setup::respawn_player(world, player);
    events.push(GameEvent::PlayerRespawned);
    LifeLoss::Respawned
}

/// Cost a life if the player has dropped below the bottom of the world.
pub fn check_fall_out(world: &mut World, events: &mut Vec<GameEvent>) -> Option<LifeLoss> {
    let fallen = world
        .query::<(&Player, &Position)>()
        .iter()
        .find(|(_, (_, pos))| pos.y > WORLD_HEIGHT + FALL_OUT_MARGIN)
        .map(|(entity, _)| entity)?;

    Some(lose_life(world, fallen, LifeLossCause::FellOut, events))
}
