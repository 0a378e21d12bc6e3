#[cfg(test)]
mod tests {
    use glam::Vec3;

    use skirmish_core::constants::SEEK_EPSILON;

    use crate::seek::{facing_toward, step, SeekContext};

    fn ctx(position: Vec3, target: Vec3, speed: f32, dt: f32) -> SeekContext {
        SeekContext {
            position,
            target,
            speed,
            dt,
        }
    }

    #[test]
    fn test_step_moves_toward_target() {
        let update = step(&ctx(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            1.0,
            0.5,
        ));
        assert!(update.moved);
        assert!((update.position.x - 0.5).abs() < 1e-6);
        assert_eq!(update.position.z, 0.0);
    }

    #[test]
    fn test_step_never_overshoots() {
        // Target 0.3 away, step would cover 1.0 — must stop at the target.
        let update = step(&ctx(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.3, 0.0, 0.0),
            1.0,
            1.0,
        ));
        assert!(update.moved);
        assert!((update.position.x - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_step_holds_inside_arrival_threshold() {
        let start = Vec3::new(0.0, 0.0, 0.0);
        let update = step(&ctx(start, Vec3::new(SEEK_EPSILON * 0.5, 0.0, 0.0), 1.0, 1.0));
        assert!(!update.moved, "Within epsilon the seeker stays put");
        assert_eq!(update.position, start);
    }

    #[test]
    fn test_step_ignores_vertical_offset() {
        // Target far above: horizontal distance is zero, so no movement.
        let start = Vec3::new(1.0, 0.0, 1.0);
        let update = step(&ctx(start, Vec3::new(1.0, 50.0, 1.0), 1.0, 1.0));
        assert!(!update.moved);
        assert_eq!(update.position.y, 0.0, "y is left for terrain snapping");
    }

    #[test]
    fn test_zero_speed_stands_still() {
        let start = Vec3::new(0.0, 0.0, 0.0);
        let update = step(&ctx(start, Vec3::new(10.0, 0.0, 0.0), 0.0, 1.0));
        assert!(!update.moved);
        assert_eq!(update.position, start);
    }

    #[test]
    fn test_diagonal_step_length_matches_speed() {
        let update = step(&ctx(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            2.0,
            1.0,
        ));
        let len = (update.position.x * update.position.x
            + update.position.z * update.position.z)
            .sqrt();
        assert!((len - 2.0).abs() < 1e-5, "Step length should be speed·dt");
    }

    #[test]
    fn test_facing_quadrants() {
        let origin = Vec3::ZERO;
        // Enemy north of the target (positive z) faces 0°.
        assert!((facing_toward(Vec3::new(0.0, 0.0, 5.0), origin) - 0.0).abs() < 1e-4);
        // Enemy east of the target faces 90°.
        assert!((facing_toward(Vec3::new(5.0, 0.0, 0.0), origin) - 90.0).abs() < 1e-4);
        // Enemy west of the target faces -90°.
        assert!((facing_toward(Vec3::new(-5.0, 0.0, 0.0), origin) + 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_facing_tracks_while_holding() {
        // Even inside the arrival threshold the facing keeps tracking.
        let update = step(&ctx(
            Vec3::new(0.05, 0.0, 0.0),
            Vec3::ZERO,
            1.0,
            1.0,
        ));
        assert!(!update.moved);
        assert!((update.facing_yaw_deg - 90.0).abs() < 1e-4);
    }
}
