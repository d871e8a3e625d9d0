//! Player/enemy overlap resolution.
//!
//! Finds every enemy the player overlaps, classifies each contact as a
//! stomp or a body hit, and applies the consequences. Scene-level effects
//! (giant spawn, victory, defeat) are left to the caller via the report.

use hecs::{Entity, World};

use yongland_core::components::{Body, Enemy, Invulnerability, Player};
use yongland_core::constants::PLAYER_DISPLAY_SIZE;
use yongland_core::enums::{EnemyKind, Interaction, LifeLossCause};
use yongland_core::events::GameEvent;
use yongland_core::types::{Aabb, Position, Velocity};

use yongland_ai::profiles::get_profile;

use crate::combat::{classify, ContactGeometry, Tally};
use crate::systems::lives::{lose_life, LifeLoss};
use crate::world_setup;

/// Result of one collision pass.
#[derive(Debug, Clone, Default)]
pub struct CollisionReport {
    /// Enemies that lost their last hit point this tick.
    pub defeated: Vec<EnemyKind>,
    /// Set when a body hit cost a life.
    pub life_loss: Option<LifeLoss>,
}

/// Resolve player/enemy overlaps for this tick.
pub fn run(world: &mut World, tally: &mut Tally, events: &mut Vec<GameEvent>) -> CollisionReport {
    let mut report = CollisionReport::default();

    let Some((player, player_half)) = world
        .query::<(&Player, &Body)>()
        .iter()
        .next()
        .map(|(entity, (_, body))| (entity, body.half))
    else {
        return report;
    };

    let mut candidates: Vec<(Entity, Position, Aabb)> = Vec::new();
    {
        let mut query = world.query::<(&Enemy, &Position, &Body)>();
        for (entity, (enemy, pos, body)) in query.iter() {
            if !enemy.hit_points.is_depleted() {
                candidates.push((entity, *pos, Aabb::from_center(*pos, body.half)));
            }
        }
    }

    for (enemy_entity, enemy_pos, enemy_box) in candidates {
        if is_invulnerable(world, player) {
            break;
        }

        let Ok(player_pos) = world.get::<&Position>(player).map(|p| *p) else {
            break;
        };
        let Ok(player_vel) = world.get::<&Velocity>(player).map(|v| *v) else {
            break;
        };
        let player_box = Aabb::from_center(player_pos, player_half);
        if !player_box.overlaps(&enemy_box) {
            continue;
        }

        let Ok(kind) = world.get::<&Enemy>(enemy_entity).map(|e| e.kind) else {
            continue;
        };
        let profile = get_profile(kind);

        // Overlap uses the bodies; the stomp test uses the drawn sprites.
        let contact = ContactGeometry {
            player_velocity: player_vel,
            player_bottom: player_pos.y + PLAYER_DISPLAY_SIZE.1 / 2.0,
            enemy_top: enemy_pos.y - profile.display_half_height,
            tolerance: profile.stomp_tolerance,
        };

        match classify(&contact) {
            Interaction::Stomp => {
                let (defeated, remaining) = {
                    let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) else {
                        continue;
                    };
                    let defeated = enemy.hit_points.take_hit();
                    (defeated, enemy.hit_points.remaining)
                };

                if let Ok(mut vel) = world.get::<&mut Velocity>(player) {
                    vel.y = profile.stomp_bounce;
                }

                if defeated {
                    tally.award(profile.score_on_defeat);
                    tally.kills += 1;
                    if kind == EnemyKind::Mini {
                        tally.minis_defeated += 1;
                    }
                    events.push(GameEvent::EnemyDefeated {
                        kind,
                        score: profile.score_on_defeat,
                    });
                    report.defeated.push(kind);
                    tracing::debug!(?kind, score = tally.score(), "enemy defeated");
                } else {
                    tally.award(profile.score_per_stomp);
                    events.push(GameEvent::EnemyStomped {
                        kind,
                        hit_points_remaining: remaining,
                    });
                    tracing::debug!(?kind, remaining, "enemy stomped");
                }

                if profile.stomp_grants_invulnerability {
                    world_setup::grant_invulnerability(world, player);
                }
            }
            Interaction::BodyHit => {
                events.push(GameEvent::PlayerHit { kind });
                tracing::debug!(?kind, "player hit");
                report.life_loss = Some(lose_life(
                    world,
                    player,
                    LifeLossCause::EnemyContact,
                    events,
                ));
                break;
            }
        }
    }

    report
}

fn is_invulnerable(world: &World, player: Entity) -> bool {
    world
        .get::<&Invulnerability>(player)
        .map(|inv| inv.active)
        .unwrap_or(false)
}
