#[cfg(test)]
mod tests {
    use glam::Vec3;

    use telekin_core::config::SessionConfig;
    use telekin_core::constants::{GRAVITY_Y, PHYSICS_DT};
    use telekin_core::enums::{HomingPolicy, LossReason};

    use crate::homing::{evaluate, FlightVerdict, HomingContext, HomingTuning};

    fn tuning() -> HomingTuning {
        HomingTuning::from(&SessionConfig::default())
    }

    fn make_context(position: Vec3, velocity: Vec3, catch_point: Vec3) -> HomingContext {
        HomingContext {
            policy: HomingPolicy::Blend,
            position,
            velocity,
            catch_point,
            age_secs: 0.5,
            secs_since_commit: 0.5,
            dt: PHYSICS_DT,
        }
    }

    #[test]
    fn test_arrival_inside_radius() {
        // Within the arrive radius the body is stopped and handed over.
        let ctx = make_context(
            Vec3::new(0.0, 1.4, -0.1),
            Vec3::new(0.0, -1.0, 2.0),
            Vec3::new(0.0, 1.5, 0.0),
        );
        let update = evaluate(&ctx, &tuning());
        assert_eq!(update.verdict, FlightVerdict::Arrived);
        assert_eq!(update.velocity, Vec3::ZERO);
        assert_eq!(update.angular_factor, 0.0);
    }

    #[test]
    fn test_far_bound_loses_flight() {
        let ctx = make_context(
            Vec3::new(60.0, 2.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::ZERO,
        );
        let update = evaluate(&ctx, &tuning());
        assert_eq!(
            update.verdict,
            FlightVerdict::Lost(LossReason::OutOfRange)
        );
        // Loss releases the body with its velocity intact.
        assert_eq!(update.velocity, ctx.velocity);
    }

    #[test]
    fn test_stall_after_grace() {
        let slow = Vec3::new(0.0, 0.01, 0.0);
        let ctx = make_context(Vec3::new(2.0, 0.0, 0.0), slow, Vec3::ZERO);
        let update = evaluate(&ctx, &tuning());
        assert_eq!(update.verdict, FlightVerdict::Lost(LossReason::Stalled));
    }

    #[test]
    fn test_grace_suspends_stall_and_correction() {
        // Same stalled body, but the shot just committed: no verdict, no touch.
        let slow = Vec3::new(0.0, 0.01, 0.0);
        let mut ctx = make_context(Vec3::new(2.0, 0.0, 0.0), slow, Vec3::ZERO);
        ctx.secs_since_commit = 0.05;
        let update = evaluate(&ctx, &tuning());
        assert_eq!(update.verdict, FlightVerdict::Continue);
        assert_eq!(update.velocity, slow);
        assert_eq!(update.angular_factor, 1.0);
    }

    #[test]
    fn test_flight_timeout() {
        let mut ctx = make_context(
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::ZERO,
        );
        ctx.age_secs = 3.5;
        let update = evaluate(&ctx, &tuning());
        assert_eq!(update.verdict, FlightVerdict::Lost(LossReason::TimedOut));
    }

    #[test]
    fn test_outside_envelope_flies_free() {
        // 10 m out: inside the far bound but beyond the correction envelope,
        // so the arc is not interfered with.
        let velocity = Vec3::new(-4.0, 2.0, 0.0);
        let ctx = make_context(Vec3::new(10.0, 1.0, 0.0), velocity, Vec3::ZERO);
        let update = evaluate(&ctx, &tuning());
        assert_eq!(update.verdict, FlightVerdict::Continue);
        assert_eq!(update.velocity, velocity);
        assert_eq!(update.angular_factor, 1.0);
    }

    #[test]
    fn test_blend_turns_without_speed_snap() {
        // One corrected tick must rotate the course toward the catch point
        // while carrying most of the speed through.
        let velocity = Vec3::new(0.0, 0.0, -3.0);
        let catch = Vec3::new(2.0, 1.0, 0.0);
        let ctx = make_context(Vec3::ZERO, velocity, catch);
        let update = evaluate(&ctx, &tuning());
        assert_eq!(update.verdict, FlightVerdict::Continue);

        let before = velocity.normalize();
        let after = update.velocity.normalize();
        let toward = (catch - ctx.position).normalize();
        assert!(
            after.dot(toward) > before.dot(toward),
            "correction should rotate the course toward the catch point"
        );
        let speed_change = (update.velocity.length() - velocity.length()).abs();
        assert!(
            speed_change < 0.5,
            "one tick should not snap the speed, changed by {speed_change}"
        );
        assert!(update.angular_factor < 1.0 && update.angular_factor > 0.0);
    }

    #[test]
    fn test_blend_converges_onto_static_catch_point() {
        // Fly the law tick by tick, gravity included, from a sideways launch
        // 3 m out; it must spiral in and arrive.
        let tuning = tuning();
        let catch = Vec3::new(0.0, 1.5, 0.0);
        let mut position = Vec3::new(3.0, 0.8, 0.0);
        let mut velocity = Vec3::new(-1.0, 3.0, 1.5);
        let mut age = 0.2_f32;
        let mut arrived = false;
        let mut min_distance = f32::MAX;

        for _ in 0..150 {
            velocity.y += GRAVITY_Y * PHYSICS_DT;
            let ctx = HomingContext {
                policy: HomingPolicy::Blend,
                position,
                velocity,
                catch_point: catch,
                age_secs: age,
                secs_since_commit: age,
                dt: PHYSICS_DT,
            };
            let update = evaluate(&ctx, &tuning);
            match update.verdict {
                FlightVerdict::Arrived => {
                    arrived = true;
                    break;
                }
                FlightVerdict::Lost(reason) => {
                    panic!("flight should not be lost, got {reason:?}");
                }
                FlightVerdict::Continue => {}
            }
            velocity = update.velocity;
            position += velocity * PHYSICS_DT;
            age += PHYSICS_DT;
            min_distance = min_distance.min((catch - position).length());
        }

        assert!(
            arrived,
            "blend homing should converge, closest approach {min_distance:.3} m"
        );
    }

    #[test]
    fn test_blend_converges_onto_moving_catch_point() {
        // The catch point tracks a hand drifting sideways at walking pace.
        let tuning = tuning();
        let mut catch = Vec3::new(0.0, 1.5, 0.0);
        let mut position = Vec3::new(2.5, 1.0, 1.0);
        let mut velocity = Vec3::new(-2.0, 2.0, -1.0);
        let mut age = 0.2_f32;
        let mut arrived = false;

        for _ in 0..150 {
            catch.x += 0.8 * PHYSICS_DT;
            velocity.y += GRAVITY_Y * PHYSICS_DT;
            let ctx = HomingContext {
                policy: HomingPolicy::Blend,
                position,
                velocity,
                catch_point: catch,
                age_secs: age,
                secs_since_commit: age,
                dt: PHYSICS_DT,
            };
            let update = evaluate(&ctx, &tuning);
            if update.verdict == FlightVerdict::Arrived {
                arrived = true;
                break;
            }
            velocity = update.velocity;
            position += velocity * PHYSICS_DT;
            age += PHYSICS_DT;
        }

        assert!(arrived, "blend homing should track a moving hand");
    }

    #[test]
    fn test_ascent_boost_preserves_climb() {
        // While climbing, the boost policy only adds thrust toward the
        // catch point; it never redirects the arc.
        let tuning = tuning();
        let velocity = Vec3::new(0.0, 3.0, -1.0);
        let catch = Vec3::new(2.0, 2.0, 0.0);
        let mut ctx = make_context(Vec3::ZERO, velocity, catch);
        ctx.policy = HomingPolicy::AscentBoost;
        let update = evaluate(&ctx, &tuning);

        let to_catch = (catch - ctx.position).normalize();
        let expected = velocity + to_catch * tuning.boost_accel * PHYSICS_DT;
        assert!(
            (update.velocity - expected).length() < 1e-5,
            "climbing boost should be additive, got {:?}",
            update.velocity
        );
    }

    #[test]
    fn test_ascent_boost_homes_once_descending() {
        // Past apex the policy collapses to the full blend correction.
        let velocity = Vec3::new(0.0, -1.0, -3.0);
        let catch = Vec3::new(2.0, 1.0, 0.0);
        let mut boost_ctx = make_context(Vec3::ZERO, velocity, catch);
        boost_ctx.policy = HomingPolicy::AscentBoost;
        let blend_ctx = make_context(Vec3::ZERO, velocity, catch);

        let boosted = evaluate(&boost_ctx, &tuning());
        let blended = evaluate(&blend_ctx, &tuning());
        assert!((boosted.velocity - blended.velocity).length() < 1e-6);
    }
}
