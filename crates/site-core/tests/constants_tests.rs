// Host-side sanity checks on the effect tuning constants and the static
// content.

use site_core::constants::*;
use site_core::content::{Span, PROJECTS};

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    // Damping scales displacement down, never up.
    assert!(MAGNET_DAMPING > 0.0 && MAGNET_DAMPING < 1.0);

    // Radii and sizes are positive, and docking grows the ring.
    assert!(BUTTON_REVEAL_RADIUS > 0.0);
    assert!(CARD_REVEAL_RADIUS > BUTTON_REVEAL_RADIUS);
    assert!(REVEAL_EDGE_SOFTNESS > 0.0 && REVEAL_EDGE_SOFTNESS < BUTTON_REVEAL_RADIUS);
    assert!(RING_DOCKED_SIZE > RING_IDLE_SIZE);
    assert!(RING_IDLE_BORDER > RING_DOCKED_BORDER);
    assert!(RING_DOCKED_BG_ALPHA > 0.0 && RING_DOCKED_BG_ALPHA < 1.0);

    // Durations are positive; the springy return is slower than the
    // follow, and the sticky dock is slower than the over-target trail.
    assert!(MAGNET_FOLLOW_SECS > 0.0);
    assert!(MAGNET_RETURN_SECS > MAGNET_FOLLOW_SECS);
    assert!(FOLLOW_OVER_SECS > 0.0);
    assert!(FOLLOW_STICKY_SECS > FOLLOW_OVER_SECS);
    assert!(FOLLOW_FREE_SECS > FOLLOW_OVER_SECS);
    assert!(RING_MORPH_SECS > 0.0);
    assert!(LABEL_SHOW_SECS > 0.0 && LABEL_HIDE_SECS > 0.0);
    assert!(LABEL_SHOW_DELAY_SECS >= 0.0);
    assert!(LABEL_HIDDEN_SCALE > 0.0 && LABEL_HIDDEN_SCALE < 1.0);

    assert!(!DEFAULT_LABEL.is_empty());
}

#[test]
fn projects_are_well_formed() {
    assert!(!PROJECTS.is_empty());

    for (i, p) in PROJECTS.iter().enumerate() {
        assert!(!p.id.is_empty(), "project {} id", i);
        assert!(!p.title.is_empty(), "project {} title", i);
        assert!(!p.description.is_empty(), "project {} description", i);
        assert!(!p.tech_stack.is_empty(), "project {} tech stack", i);
        assert!(p.gradient.from.starts_with('#'), "project {} gradient", i);
        assert!(p.gradient.to.starts_with('#'), "project {} gradient", i);
    }

    // Ids are unique.
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }

    // The bento layout uses every footprint.
    assert!(PROJECTS.iter().any(|p| p.span == Span::Normal));
    assert!(PROJECTS.iter().any(|p| p.span == Span::Wide));
    assert!(PROJECTS.iter().any(|p| p.span == Span::Tall));
}
