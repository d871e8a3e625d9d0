//! Player control system: turns the held input into player velocity.

use hecs::World;

use yongland_core::components::{Contacts, Player};
use yongland_core::constants::{PLAYER_JUMP_VELOCITY, PLAYER_SPEED};
use yongland_core::input::ControlIntent;
use yongland_core::types::Velocity;

/// Apply the control intent to the player. Left wins when both directions
/// are held. Jumping needs the player to be standing on something.
pub fn run(world: &mut World, intent: ControlIntent) {
    for (_entity, (_player, vel, contacts)) in
        world.query_mut::<(&Player, &mut Velocity, &Contacts)>()
    {
        vel.x = if intent.move_left {
            -PLAYER_SPEED
        } else if intent.move_right {
            PLAYER_SPEED
        } else {
            0.0
        };

        if intent.jump && contacts.resting {
            vel.y = PLAYER_JUMP_VELOCITY;
        }
    }
}
