//! Invulnerability countdown.

use hecs::World;

use yongland_core::components::Invulnerability;

/// Count down every open invulnerability window by one tick and close
/// the ones that run out.
pub fn run(world: &mut World) {
    for (_entity, inv) in world.query_mut::<&mut Invulnerability>() {
        if !inv.active {
            continue;
        }
        inv.remaining_ticks = inv.remaining_ticks.saturating_sub(1);
        if inv.remaining_ticks == 0 {
            inv.active = false;
        }
    }
}
