// Host-side tests for the X-ray reveal mask.

use glam::Vec2;
use site_core::constants::{BUTTON_REVEAL_RADIUS, CARD_REVEAL_RADIUS};
use site_core::reveal::RevealMask;

#[test]
fn idle_layer_is_fully_suppressed() {
    let reveal = RevealMask::new(BUTTON_REVEAL_RADIUS);
    assert_eq!(reveal.opacity(), 0.0);
    assert!(reveal.disc().is_none());
    assert!(reveal.mask_expression().is_none());
}

#[test]
fn idle_layer_stays_suppressed_regardless_of_last_position() {
    let mut reveal = RevealMask::new(BUTTON_REVEAL_RADIUS);
    reveal.enter(Vec2::new(10.0, 20.0));
    reveal.pointer_move(Vec2::new(30.0, 40.0));
    reveal.leave();
    // Position is retained, but opacity and mask drop together.
    assert_eq!(reveal.position(), Vec2::new(30.0, 40.0));
    assert_eq!(reveal.opacity(), 0.0);
    assert!(reveal.mask_expression().is_none());
    assert!(reveal.cutout_expression().is_none());
}

#[test]
fn hover_mask_follows_the_latest_position() {
    let mut reveal = RevealMask::new(CARD_REVEAL_RADIUS);
    reveal.enter(Vec2::new(10.0, 20.0));
    assert_eq!(reveal.opacity(), 1.0);
    assert_eq!(reveal.disc(), Some((Vec2::new(10.0, 20.0), CARD_REVEAL_RADIUS)));

    reveal.pointer_move(Vec2::new(64.0, 48.0));
    assert_eq!(reveal.disc(), Some((Vec2::new(64.0, 48.0), CARD_REVEAL_RADIUS)));
}

#[test]
fn next_hover_starts_from_its_entry_position() {
    let mut reveal = RevealMask::new(BUTTON_REVEAL_RADIUS);
    reveal.enter(Vec2::new(10.0, 20.0));
    reveal.leave();
    reveal.enter(Vec2::new(5.0, 5.0));
    assert_eq!(reveal.disc(), Some((Vec2::new(5.0, 5.0), BUTTON_REVEAL_RADIUS)));
}

#[test]
fn mask_expression_is_a_soft_edged_circle() {
    let mut reveal = RevealMask::new(50.0);
    reveal.enter(Vec2::new(12.0, 20.0));

    let mask = reveal.mask_expression().unwrap();
    assert!(mask.contains("circle 50px at 12px 20px"), "{}", mask);
    assert!(mask.contains("black 49px"), "{}", mask);
    assert!(mask.contains("transparent 50px"), "{}", mask);

    // The cutout is the exact complement.
    let cutout = reveal.cutout_expression().unwrap();
    assert!(cutout.contains("circle 50px at 12px 20px"), "{}", cutout);
    assert!(cutout.contains("transparent 49px"), "{}", cutout);
    assert!(cutout.contains("black 50px"), "{}", cutout);
}
