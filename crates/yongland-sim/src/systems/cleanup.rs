//! Cleanup system: removes defeated enemies.

use hecs::{Entity, World};

use yongland_core::components::Enemy;

/// Despawn every enemy whose hit points are gone.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.hit_points.is_depleted() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
