// Host-side tests for the magnetic displacement effect.

use glam::Vec2;
use site_core::constants::{MAGNET_DAMPING, MAGNET_FOLLOW_SECS, MAGNET_RETURN_SECS};
use site_core::geometry::Bounds;
use site_core::magnet::MagneticMotion;

#[test]
fn target_translation_is_the_damped_center_offset() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let mut motion = MagneticMotion::new();
    // (150, 80) sits (50, 30) from the element center.
    motion.pointer_move(Vec2::new(150.0, 80.0), &bounds, 0.0);
    assert_eq!(
        motion.target(),
        Vec2::new(50.0 * MAGNET_DAMPING, 30.0 * MAGNET_DAMPING)
    );
}

#[test]
fn pointer_at_center_produces_no_displacement() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let mut motion = MagneticMotion::new();
    motion.pointer_move(Vec2::new(100.0, 50.0), &bounds, 0.0);
    assert_eq!(motion.target(), Vec2::ZERO);
}

#[test]
fn offset_is_not_clamped_to_the_element_size() {
    // A pointer far outside the bounds (possible when leave events lag)
    // produces an offset larger than the element itself.
    let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
    let mut motion = MagneticMotion::new();
    motion.pointer_move(Vec2::new(1000.0, 20.0), &bounds, 0.0);
    assert!(motion.target().x > bounds.width);
}

#[test]
fn follow_settles_on_the_damped_offset() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let mut motion = MagneticMotion::new();
    motion.pointer_move(Vec2::new(150.0, 80.0), &bounds, 0.0);
    let settled = motion.sample(MAGNET_FOLLOW_SECS + 0.01);
    assert_eq!(settled, motion.target());
    assert!(motion.is_settled());
}

#[test]
fn leave_returns_to_the_origin() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let mut motion = MagneticMotion::new();
    motion.pointer_move(Vec2::new(150.0, 80.0), &bounds, 0.0);
    motion.sample(1.0);

    motion.pointer_leave(1.0);
    assert_eq!(motion.target(), Vec2::ZERO);
    assert_eq!(motion.sample(1.0 + MAGNET_RETURN_SECS + 0.01), Vec2::ZERO);
    assert!(motion.is_settled());
}

#[test]
fn elastic_return_overshoots_the_origin() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let mut motion = MagneticMotion::new();
    motion.pointer_move(Vec2::new(150.0, 80.0), &bounds, 0.0);
    motion.sample(1.0);
    assert!(motion.target().x > 0.0);

    // Early in the springy return the translation crosses past zero
    // before settling; the follow tween never does that.
    motion.pointer_leave(1.0);
    let early = motion.sample(1.0 + 0.05);
    assert!(early.x < 0.0, "expected overshoot, got {}", early.x);
}
