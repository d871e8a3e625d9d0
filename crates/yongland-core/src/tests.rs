#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::InputState;
    use crate::state::GameStateSnapshot;
    use crate::types::{secs_to_ticks, Aabb, HalfExtents, HitPoints, Position, SimTime, Velocity};

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = PlayerCommand::KeyDown { key: Key::Space };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"Space"}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Start"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::Start));
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = GameEvent::LifeLost {
            cause: LifeLossCause::EnemyContact,
            lives_remaining: 4,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.starts_with(r#"{"type":"LifeLost""#), "got {json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains(r#""scene":"Menu""#));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scene, ScenePhase::Menu);
        assert!(back.player.is_none());
    }

    #[test]
    fn test_hit_points_never_negative() {
        let mut hp = HitPoints::full(3);
        assert!(!hp.take_hit());
        assert!(!hp.take_hit());
        assert!(hp.take_hit(), "third hit should deplete");
        assert!(hp.is_depleted());
        // Further hits do nothing and never report depletion again.
        assert!(!hp.take_hit());
        assert_eq!(hp.remaining, 0);
        assert_eq!(hp.hits_taken(), 3);
    }

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::from_center(Position::new(0.0, 0.0), HalfExtents::new(10.0, 10.0));
        let touching = Aabb::from_center(Position::new(20.0, 0.0), HalfExtents::new(10.0, 10.0));
        let inside = Aabb::from_center(Position::new(19.0, 5.0), HalfExtents::new(10.0, 10.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        assert_eq!(a.top(), -10.0);
        assert_eq!(a.bottom(), 10.0);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_descending_means_positive_y() {
        assert!(Velocity::new(0.0, 50.0).is_descending());
        assert!(!Velocity::new(0.0, 0.0).is_descending());
        assert!(!Velocity::new(0.0, -350.0).is_descending());
    }

    #[test]
    fn test_patrol_direction() {
        assert_eq!(PatrolDirection::Left.sign(), -1.0);
        assert_eq!(PatrolDirection::Right.reversed(), PatrolDirection::Left);
        assert_eq!(PatrolDirection::toward(100.0, 50.0), PatrolDirection::Left);
        assert_eq!(PatrolDirection::toward(100.0, 150.0), PatrolDirection::Right);
    }

    #[test]
    fn test_input_merges_keyboard_and_touch() {
        let mut input = InputState::default();
        assert_eq!(input.intent(), Default::default());

        input.set_key(Key::A, true);
        assert!(input.intent().move_left);
        input.set_key(Key::A, false);
        input.set_touch(TouchButton::Left, true);
        assert!(input.intent().move_left);

        input.set_key(Key::Space, true);
        assert!(input.intent().jump);
        input.set_key(Key::Space, false);
        input.set_key(Key::W, true);
        assert!(input.intent().jump);

        input.clear();
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_confirm_keys() {
        assert!(Key::Space.is_confirm());
        assert!(Key::Enter.is_confirm());
        assert!(!Key::W.is_confirm());
    }

    #[test]
    fn test_tick_timing_60_ticks_one_second() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_secs_to_ticks() {
        assert_eq!(secs_to_ticks(INVULNERABILITY_SECS), 144);
        assert_eq!(secs_to_ticks(VICTORY_DELAY_SECS), 30);
        assert_eq!(secs_to_ticks(GIANT_SPAWN_DELAY_SECS), 60);
        assert_eq!(secs_to_ticks(-1.0), 0);
    }

    #[test]
    fn test_spawn_points_inside_world() {
        for (x, y) in MINI_SPAWNS {
            assert!(x > 0.0 && x < WORLD_WIDTH);
            assert!(y > 0.0 && y < WORLD_HEIGHT);
        }
        assert_eq!(MINI_SPAWNS.len() as u32, MINI_COUNT);
        assert!(GIANT_STOMP_TOLERANCE > MINI_STOMP_TOLERANCE);
    }
}
