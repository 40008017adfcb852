//! Magnetic displacement: a hovered element leans toward the pointer.

use crate::constants::{MAGNET_DAMPING, MAGNET_FOLLOW_SECS, MAGNET_RETURN_SECS};
use crate::geometry::Bounds;
use crate::tween::{Channel2, Ease};
use glam::Vec2;

/// Animated translation of one magnetic element.
///
/// While the pointer moves over the element the translation chases a
/// damped center-relative offset with a short deceleration; on leave it
/// springs back to the origin with an elastic overshoot. The asymmetry
/// (snappy follow, springy return) is intentional. The offset is not
/// clamped to the element size.
#[derive(Clone, Debug, Default)]
pub struct MagneticMotion {
    translation: Channel2,
}

impl MagneticMotion {
    pub fn new() -> Self {
        Self {
            translation: Channel2::new(Vec2::ZERO),
        }
    }

    /// Damped displacement for a pointer at `relative` within an element
    /// of the given bounds.
    pub fn offset_for(relative: Vec2, bounds: &Bounds) -> Vec2 {
        (relative - bounds.size() * 0.5) * MAGNET_DAMPING
    }

    /// Pointer moved over the element; `relative` is element-relative.
    pub fn pointer_move(&mut self, relative: Vec2, bounds: &Bounds, now: f64) {
        let offset = Self::offset_for(relative, bounds);
        self.translation
            .tween_to(offset, MAGNET_FOLLOW_SECS, Ease::CubicOut, now);
    }

    /// Pointer left the element; spring back to the origin.
    pub fn pointer_leave(&mut self, now: f64) {
        self.translation
            .tween_to(Vec2::ZERO, MAGNET_RETURN_SECS, Ease::ElasticOut, now);
    }

    pub fn sample(&mut self, now: f64) -> Vec2 {
        self.translation.sample(now)
    }

    pub fn target(&self) -> Vec2 {
        self.translation.target()
    }

    pub fn is_settled(&self) -> bool {
        self.translation.is_settled()
    }
}
