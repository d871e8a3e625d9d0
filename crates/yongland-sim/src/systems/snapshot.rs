//! Snapshot system: reads the active scene and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use yongland_core::components::*;
use yongland_core::constants::{GIANT_HIT_POINTS, MINI_COUNT};
use yongland_core::enums::EnemyKind;
use yongland_core::events::GameEvent;
use yongland_core::state::*;
use yongland_core::types::{Position, SimTime, Velocity};

use crate::scene::{PlayScene, Scene};

/// Build a complete GameStateSnapshot for the current scene.
pub fn build_snapshot(
    scene: &Scene,
    time: &SimTime,
    paused: bool,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let mut snapshot = GameStateSnapshot {
        time: *time,
        scene: scene.phase(),
        paused,
        events,
        ..Default::default()
    };

    match scene {
        Scene::Menu => {}
        Scene::Playing(play) => {
            snapshot.player = build_player(&play.world);
            snapshot.enemies = build_enemies(&play.world);
            snapshot.platforms = build_platforms(&play.world);
            snapshot.goal = build_goal(&play.world);
            snapshot.hud = build_hud(play);
        }
        Scene::GameOver(result) => {
            snapshot.result = Some(*result);
            snapshot.hud = HudView {
                score: result.score,
                kills: result.kills,
                minis_total: MINI_COUNT,
                giant_hits_required: GIANT_HIT_POINTS,
                ..Default::default()
            };
        }
    }

    snapshot
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Velocity, &Body, &Contacts, &Invulnerability)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, body, contacts, inv))| PlayerView {
            position: *pos,
            velocity: *vel,
            half: body.half,
            resting: contacts.resting,
            invulnerable: inv.active,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Velocity, &Body)>()
        .iter()
        .filter(|(_, (enemy, ..))| !enemy.hit_points.is_depleted())
        .map(|(_, (enemy, pos, vel, body))| EnemyView {
            kind: enemy.kind,
            position: *pos,
            velocity: *vel,
            half: body.half,
            hit_points: enemy.hit_points.remaining,
            max_hit_points: enemy.hit_points.max,
            direction: enemy.direction,
        })
        .collect()
}

fn build_platforms(world: &World) -> Vec<PlatformView> {
    world
        .query::<(&Platform, &Position)>()
        .iter()
        .map(|(_, (platform, pos))| PlatformView {
            position: *pos,
            half: platform.half,
        })
        .collect()
}

fn build_goal(world: &World) -> Option<PlatformView> {
    world
        .query::<(&Goal, &Position)>()
        .iter()
        .next()
        .map(|(_, (goal, pos))| PlatformView {
            position: *pos,
            half: goal.half,
        })
}

fn build_hud(play: &PlayScene) -> HudView {
    let lives = play
        .world
        .query::<(&Player, &Lives)>()
        .iter()
        .next()
        .map(|(_, (_, lives))| lives.remaining)
        .unwrap_or(0);

    let giant_hits = if play.giant_spawned {
        let live_giant = play
            .world
            .query::<&Enemy>()
            .iter()
            .find(|(_, enemy)| enemy.kind == EnemyKind::Giant)
            .map(|(_, enemy)| enemy.hit_points.hits_taken());
        // A spawned giant that is gone has been beaten.
        Some(live_giant.unwrap_or(GIANT_HIT_POINTS))
    } else {
        None
    };

    HudView {
        lives,
        score: play.tally.score(),
        kills: play.tally.kills,
        minis_remaining: MINI_COUNT.saturating_sub(play.tally.minis_defeated),
        minis_total: MINI_COUNT,
        giant_hits,
        giant_hits_required: GIANT_HIT_POINTS,
        banner: play.banner.clone(),
    }
}
