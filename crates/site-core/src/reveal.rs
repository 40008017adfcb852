//! Circular X-ray reveal: a pointer-centered window onto a color-inverted
//! duplicate of the content.

use crate::constants::REVEAL_EDGE_SOFTNESS;
use glam::Vec2;

/// Hover-gated circular mask over one element.
///
/// Opacity and mask presence are coupled to the same hover flag, so a
/// rapid enter/leave can never leave the inverted layer visible with a
/// stale mask. While idle the layer is fully suppressed rather than
/// clipped to a zero-radius circle. The last pointer position is retained
/// across idle periods but stops feeding the mask; a new hover starts
/// from its entry position.
#[derive(Clone, Debug)]
pub struct RevealMask {
    radius: f32,
    hovering: bool,
    position: Vec2,
}

impl RevealMask {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            hovering: false,
            position: Vec2::ZERO,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Last element-relative pointer position seen (stale while idle).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn enter(&mut self, relative: Vec2) {
        self.hovering = true;
        self.position = relative;
    }

    pub fn pointer_move(&mut self, relative: Vec2) {
        self.position = relative;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    /// 1 while hovering, 0 while idle.
    pub fn opacity(&self) -> f32 {
        if self.hovering {
            1.0
        } else {
            0.0
        }
    }

    /// Mask disc `(center, radius)` while hovering; `None` while idle.
    pub fn disc(&self) -> Option<(Vec2, f32)> {
        self.hovering.then_some((self.position, self.radius))
    }

    /// CSS mask keeping only the disc: opaque inside, transparent outside,
    /// with a soft edge.
    pub fn mask_expression(&self) -> Option<String> {
        self.disc().map(|(center, radius)| {
            format!(
                "radial-gradient(circle {r}px at {x}px {y}px, black {inner}px, transparent {r}px)",
                r = radius,
                x = center.x,
                y = center.y,
                inner = radius - REVEAL_EDGE_SOFTNESS,
            )
        })
    }

    /// Complementary mask cutting the disc out of the normal layer, so the
    /// two stacked layers never double-expose.
    pub fn cutout_expression(&self) -> Option<String> {
        self.disc().map(|(center, radius)| {
            format!(
                "radial-gradient(circle {r}px at {x}px {y}px, transparent {inner}px, black {r}px)",
                r = radius,
                x = center.x,
                y = center.y,
                inner = radius - REVEAL_EDGE_SOFTNESS,
            )
        })
    }
}
