#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use yongland_core::constants::*;
    use yongland_core::enums::{EnemyKind, PatrolDirection};
    use yongland_core::types::{Position, Velocity};

    use crate::profiles::{get_profile, Disposition};
    use crate::stepper::{initial_direction, step, steering, EnemyContext, Steering};

    /// A generator whose every roll comes out as zero: never turns, never jumps.
    fn quiet_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn make_context(kind: EnemyKind, x: f64, player_x: Option<f64>) -> EnemyContext {
        EnemyContext {
            kind,
            position: Position::new(x, 300.0),
            velocity: Velocity::zero(),
            direction: PatrolDirection::Right,
            resting: true,
            blocked_left: false,
            blocked_right: false,
            player_position: player_x.map(|px| Position::new(px, 300.0)),
        }
    }

    #[test]
    fn test_mini_flees_player_on_the_left() {
        let ctx = make_context(EnemyKind::Mini, 500.0, Some(420.0));
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_velocity.x, MINI_SPEED, "should run right, away");
    }

    #[test]
    fn test_mini_flees_player_on_the_right() {
        let ctx = make_context(EnemyKind::Mini, 500.0, Some(560.0));
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_velocity.x, -MINI_SPEED);
    }

    #[test]
    fn test_same_x_flees_left_and_chases_right() {
        let mini = make_context(EnemyKind::Mini, 500.0, Some(500.0));
        assert_eq!(step(&mini, &mut quiet_rng()).new_velocity.x, -MINI_SPEED);

        let giant = make_context(EnemyKind::Giant, 500.0, Some(500.0));
        assert_eq!(step(&giant, &mut quiet_rng()).new_velocity.x, GIANT_SPEED);
    }

    #[test]
    fn test_mini_patrols_when_player_far() {
        let mut ctx = make_context(EnemyKind::Mini, 500.0, Some(900.0));
        ctx.direction = PatrolDirection::Left;
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_velocity.x, -MINI_SPEED);
        assert_eq!(update.new_direction, PatrolDirection::Left);
    }

    #[test]
    fn test_avoid_radius_is_exclusive() {
        let profile = get_profile(EnemyKind::Mini);
        let at_edge = make_context(EnemyKind::Mini, 500.0, Some(500.0 + MINI_AVOID_RADIUS));
        assert_eq!(steering(&at_edge, &profile), Steering::Patrol);
        let inside = make_context(
            EnemyKind::Mini,
            500.0,
            Some(500.0 + MINI_AVOID_RADIUS - 0.5),
        );
        assert_eq!(steering(&inside, &profile), Steering::Flee);
    }

    #[test]
    fn test_patrol_without_player() {
        let ctx = make_context(EnemyKind::Giant, 500.0, None);
        let profile = get_profile(EnemyKind::Giant);
        assert_eq!(steering(&ctx, &profile), Steering::Patrol);
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_velocity.x, GIANT_SPEED);
    }

    #[test]
    fn test_giant_chases_at_any_distance() {
        let ctx = make_context(EnemyKind::Giant, 1200.0, Some(10.0));
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_velocity.x, -GIANT_SPEED);

        let ctx = make_context(EnemyKind::Giant, 100.0, Some(1200.0));
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_velocity.x, GIANT_SPEED);
    }

    #[test]
    fn test_blocked_reverses_direction() {
        let mut ctx = make_context(EnemyKind::Mini, 1270.0, None);
        ctx.blocked_right = true;
        let update = step(&ctx, &mut quiet_rng());
        assert_eq!(update.new_direction, PatrolDirection::Left);
        // Velocity for this tick still follows the old direction.
        assert_eq!(update.new_velocity.x, MINI_SPEED);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ctx = make_context(EnemyKind::Mini, 500.0, None);
        ctx.resting = false;
        ctx.velocity = Velocity::new(0.0, 120.0);
        for _ in 0..5_000 {
            let update = step(&ctx, &mut rng);
            assert!(!update.jumped);
            assert_eq!(update.new_velocity.y, 120.0, "vertical velocity untouched");
        }
    }

    #[test]
    fn test_jump_rate_matches_roll() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let ctx = make_context(EnemyKind::Mini, 500.0, None);
        let trials = 20_000;
        let jumps = (0..trials).filter(|_| step(&ctx, &mut rng).jumped).count();
        // 3 of 101 outcomes exceed 97.
        let expected = trials as f64 * 3.0 / 101.0;
        let observed = jumps as f64;
        assert!(
            (observed - expected).abs() < expected * 0.25,
            "jumps {observed} far from expected {expected}"
        );
    }

    #[test]
    fn test_jump_sets_kind_velocity() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ctx = make_context(EnemyKind::Giant, 500.0, Some(800.0));
        let update = (0..10_000)
            .map(|_| step(&ctx, &mut rng))
            .find(|u| u.jumped)
            .expect("giant should jump eventually");
        assert_eq!(update.new_velocity.y, GIANT_JUMP_VELOCITY);
    }

    #[test]
    fn test_giant_never_turns_at_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let ctx = make_context(EnemyKind::Giant, 500.0, None);
        for _ in 0..5_000 {
            assert_eq!(step(&ctx, &mut rng).new_direction, PatrolDirection::Right);
        }
    }

    #[test]
    fn test_mini_turns_occasionally() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let ctx = make_context(EnemyKind::Mini, 500.0, None);
        let turns = (0..5_000)
            .filter(|_| step(&ctx, &mut rng).new_direction == PatrolDirection::Left)
            .count();
        assert!(turns > 0, "minis should turn now and then");
        assert!(turns < 500, "turning should be rare, got {turns}");
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let ctx = make_context(EnemyKind::Mini, 500.0, None);
        let mut a = ChaCha8Rng::seed_from_u64(1234);
        let mut b = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..1_000 {
            assert_eq!(step(&ctx, &mut a), step(&ctx, &mut b));
        }
    }

    #[test]
    fn test_initial_direction() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            initial_direction(EnemyKind::Giant, &mut rng),
            PatrolDirection::Right
        );
        let draws = 30_000;
        let rights = (0..draws)
            .filter(|_| initial_direction(EnemyKind::Mini, &mut rng) == PatrolDirection::Right)
            .count();
        let share = rights as f64 / draws as f64;
        assert!((0.30..0.37).contains(&share), "right share {share}");
    }

    #[test]
    fn test_profiles() {
        let mini = get_profile(EnemyKind::Mini);
        let giant = get_profile(EnemyKind::Giant);
        assert_eq!(mini.hit_points, 1);
        assert_eq!(giant.hit_points, 3);
        assert!(matches!(mini.disposition, Disposition::Avoid { .. }));
        assert!(matches!(giant.disposition, Disposition::Chase { radius: None }));
        assert!(mini.speed < PLAYER_SPEED, "minis are slower than Bert");
        assert!(mini.jump_velocity < PLAYER_JUMP_VELOCITY, "minis jump higher");
        assert!(giant.half.half_height > mini.half.half_height);
        assert!(giant.display_half_height > mini.display_half_height);
    }
}
