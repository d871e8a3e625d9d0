//! Enemy AI system: runs the stepper for every live enemy.
//!
//! Calls the stepper from yongland-ai to compute velocity and direction,
//! then writes the results back into the ECS components.

use hecs::World;
use rand::Rng;

use yongland_core::components::{Contacts, Enemy, Player};
use yongland_core::enums::PatrolDirection;
use yongland_core::types::{Position, Velocity};

use yongland_ai::stepper::{step, EnemyContext};

/// Run the enemy AI for one tick.
pub fn run<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    let player_position = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(hecs::Entity, Velocity, PatrolDirection)> = Vec::new();

    {
        let mut query = world.query::<(&Enemy, &Position, &Velocity, &Contacts)>();
        for (entity, (enemy, pos, vel, contacts)) in query.iter() {
            if enemy.hit_points.is_depleted() {
                continue;
            }

            let ctx = EnemyContext {
                kind: enemy.kind,
                position: *pos,
                velocity: *vel,
                direction: enemy.direction,
                resting: contacts.resting,
                blocked_left: contacts.blocked_left,
                blocked_right: contacts.blocked_right,
                player_position,
            };

            let update = step(&ctx, rng);
            updates.push((entity, update.new_velocity, update.new_direction));
        }
    }

    for (entity, new_velocity, new_direction) in updates {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = new_velocity;
        }
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.direction = new_direction;
        }
    }
}
