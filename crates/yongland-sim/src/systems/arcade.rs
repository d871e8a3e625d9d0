//! Arcade physics: gravity, platform collision, and world bounds.
//!
//! Integration is axis-separated. Bodies move along x and are pushed out
//! of any platform they entered sideways, then move along y and land on
//! (or bump their head against) platforms. Contact flags are rebuilt from
//! scratch every tick.

use hecs::World;

use yongland_core::components::{Body, Contacts, Platform};
use yongland_core::constants::{BOUNCE_REST_THRESHOLD, DT, GRAVITY, WORLD_HEIGHT, WORLD_WIDTH};
use yongland_core::types::{Aabb, Position, Velocity};

/// Overlap below this many pixels counts as touching, not penetrating.
const CONTACT_EPSILON: f64 = 1e-6;

/// Step every dynamic body by one tick.
pub fn run(world: &mut World) {
    let platforms: Vec<Aabb> = world
        .query::<(&Platform, &Position)>()
        .iter()
        .map(|(_, (platform, pos))| Aabb::from_center(*pos, platform.half))
        .collect();

    for (_entity, (pos, vel, body, contacts)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Body, &mut Contacts)>()
    {
        *contacts = Contacts::default();
        vel.y += GRAVITY * DT;

        pos.x += vel.x * DT;
        resolve_horizontal(pos, vel, body, contacts, &platforms);

        pos.y += vel.y * DT;
        resolve_vertical(pos, vel, body, contacts, &platforms);

        clamp_to_world(pos, vel, body, contacts);
    }
}

fn penetration(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    a_max.min(b_max) - a_min.max(b_min)
}

fn resolve_horizontal(
    pos: &mut Position,
    vel: &mut Velocity,
    body: &Body,
    contacts: &mut Contacts,
    platforms: &[Aabb],
) {
    let half_w = body.half.half_width;
    for platform in platforms {
        let aabb = Aabb::from_center(*pos, body.half);
        let dx = penetration(aabb.left(), aabb.right(), platform.left(), platform.right());
        let dy = penetration(aabb.top(), aabb.bottom(), platform.top(), platform.bottom());
        if dx <= CONTACT_EPSILON || dy <= CONTACT_EPSILON {
            continue;
        }

        // Push out on the side the body came from; a stationary body takes the shorter exit.
        let from_left = if vel.x != 0.0 {
            vel.x > 0.0
        } else {
            pos.x < (platform.left() + platform.right()) / 2.0
        };
        if from_left {
            pos.x = platform.left() - half_w;
            contacts.blocked_right = true;
        } else {
            pos.x = platform.right() + half_w;
            contacts.blocked_left = true;
        }
        vel.x = 0.0;
    }
}

fn resolve_vertical(
    pos: &mut Position,
    vel: &mut Velocity,
    body: &Body,
    contacts: &mut Contacts,
    platforms: &[Aabb],
) {
    let half_h = body.half.half_height;
    for platform in platforms {
        let aabb = Aabb::from_center(*pos, body.half);
        let dx = penetration(aabb.left(), aabb.right(), platform.left(), platform.right());
        let dy = penetration(aabb.top(), aabb.bottom(), platform.top(), platform.bottom());
        if dx <= CONTACT_EPSILON || dy <= 0.0 {
            continue;
        }

        if vel.y >= 0.0 {
            pos.y = platform.top() - half_h;
            land(vel, body, contacts);
        } else {
            pos.y = platform.bottom() + half_h;
            vel.y = 0.0;
        }
    }
}

fn clamp_to_world(pos: &mut Position, vel: &mut Velocity, body: &Body, contacts: &mut Contacts) {
    let half_w = body.half.half_width;
    let half_h = body.half.half_height;

    if pos.x - half_w < 0.0 {
        pos.x = half_w;
        vel.x = vel.x.max(0.0);
        contacts.blocked_left = true;
    } else if pos.x + half_w > WORLD_WIDTH {
        pos.x = WORLD_WIDTH - half_w;
        vel.x = vel.x.min(0.0);
        contacts.blocked_right = true;
    }

    if pos.y - half_h < 0.0 {
        pos.y = half_h;
        vel.y = vel.y.max(0.0);
    } else if pos.y + half_h > WORLD_HEIGHT {
        pos.y = WORLD_HEIGHT - half_h;
        if vel.y > 0.0 {
            land(vel, body, contacts);
        }
        contacts.resting = true;
    }
}

/// Reflect landing speed by the bounce factor; small rebounds settle.
fn land(vel: &mut Velocity, body: &Body, contacts: &mut Contacts) {
    let rebound = -vel.y * body.bounce;
    vel.y = if rebound.abs() < BOUNCE_REST_THRESHOLD {
        0.0
    } else {
        rebound
    };
    contacts.resting = true;
}
