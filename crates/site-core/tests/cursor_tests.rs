// Host-side tests for the cursor follower state machine.

use glam::Vec2;
use site_core::constants::{
    DEFAULT_LABEL, RING_IDLE_BORDER, RING_IDLE_SIZE, RING_MORPH_SECS,
};
use site_core::cursor::{CursorFollower, Hover, Label, MagnetConfig, Transition};
use site_core::geometry::Bounds;

fn target_bounds() -> Bounds {
    Bounds::new(100.0, 100.0, 200.0, 80.0)
}

fn config(sticky: bool, label: Label, ring_size: f32) -> MagnetConfig {
    MagnetConfig {
        sticky,
        label,
        ring_size,
    }
}

fn over(id: u32, config: &MagnetConfig) -> Hover<'_> {
    Hover::Target {
        id,
        config,
        bounds: target_bounds(),
    }
}

#[test]
fn first_move_places_the_ring_without_a_sweep() {
    let mut f = CursorFollower::new();
    let p = Vec2::new(640.0, 360.0);
    f.pointer_move(p, Hover::None, 0.0);
    let v = f.sample(0.0);
    assert_eq!(v.dot, p);
    assert_eq!(v.position, p);
}

#[test]
fn dot_tracks_the_raw_pointer_without_easing() {
    let mut f = CursorFollower::new();
    f.pointer_move(Vec2::new(10.0, 10.0), Hover::None, 0.0);
    f.pointer_move(Vec2::new(500.0, 300.0), Hover::None, 0.01);
    // Sampled immediately after the move, the dot is already there.
    assert_eq!(f.sample(0.01).dot, Vec2::new(500.0, 300.0));
}

#[test]
fn entry_fires_only_on_identity_change() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Default, 120.0);

    let t = f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);
    assert_eq!(t, Some(Transition::Entered(1)));

    // Motion inside the same target must not replay the entry.
    let t = f.pointer_move(Vec2::new(180.0, 140.0), over(1, &cfg), 0.1);
    assert_eq!(t, None);
    let t = f.pointer_move(Vec2::new(210.0, 160.0), over(1, &cfg), 0.2);
    assert_eq!(t, None);
    assert_eq!(f.current_target(), Some(1));

    // The size morph keeps running from the original entry: it settles at
    // entry-time + duration, which it would not if a later move had
    // restarted it.
    let settled = f.sample(RING_MORPH_SECS + 0.01);
    assert_eq!(settled.size, 120.0);
}

#[test]
fn switching_targets_replays_the_entry() {
    let mut f = CursorFollower::new();
    let a = config(true, Label::Default, 120.0);
    let b = config(true, Label::Default, 60.0);

    assert_eq!(
        f.pointer_move(Vec2::new(150.0, 120.0), over(1, &a), 0.0),
        Some(Transition::Entered(1))
    );
    assert_eq!(
        f.pointer_move(Vec2::new(160.0, 130.0), over(2, &b), 0.1),
        Some(Transition::Entered(2))
    );
    assert_eq!(f.current_target(), Some(2));
    assert_eq!(f.size_target(), 60.0);
}

#[test]
fn sticky_ring_converges_to_the_target_center() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Default, 100.0);

    f.pointer_move(Vec2::new(120.0, 110.0), over(1, &cfg), 0.0);
    // Wherever the pointer wanders inside the target, the ring heads for
    // the bounds center.
    f.pointer_move(Vec2::new(290.0, 170.0), over(1, &cfg), 0.2);
    assert_eq!(f.position_target(), target_bounds().center());
    assert_eq!(f.sample(10.0).position, target_bounds().center());
}

#[test]
fn non_sticky_ring_tracks_the_raw_pointer() {
    let mut f = CursorFollower::new();
    let cfg = config(false, Label::Default, 100.0);

    f.pointer_move(Vec2::new(120.0, 110.0), over(1, &cfg), 0.0);
    let p = Vec2::new(250.0, 150.0);
    f.pointer_move(p, over(1, &cfg), 0.2);
    assert_eq!(f.position_target(), p);
}

#[test]
fn size_override_and_default_label() {
    // ringSize given, label absent, sticky absent: ring heads for 120 and
    // the shared explore label shows.
    let mut f = CursorFollower::new();
    let cfg = MagnetConfig {
        ring_size: 120.0,
        ..MagnetConfig::default()
    };
    assert!(cfg.sticky);

    f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);
    assert_eq!(f.size_target(), 120.0);
    assert_eq!(f.label_text(), DEFAULT_LABEL);
    assert_eq!(f.label_opacity_target(), 1.0);
    assert_eq!(f.position_target(), target_bounds().center());
}

#[test]
fn hidden_label_marker_suppresses_the_label() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Hidden, 100.0);
    f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);
    assert_eq!(f.label_opacity_target(), 0.0);
}

#[test]
fn custom_label_shows_the_custom_text() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Custom("SCROLL".to_string()), 60.0);
    f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);
    assert_eq!(f.label_text(), "SCROLL");
    assert_eq!(f.label_opacity_target(), 1.0);
}

#[test]
fn label_show_is_delayed_after_entry() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Default, 100.0);
    f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);
    // Still inside the show delay.
    assert_eq!(f.sample(0.05).label_opacity, 0.0);
    assert_eq!(f.sample(0.45).label_opacity, 1.0);
}

#[test]
fn exit_resets_the_ring_to_idle() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Default, 120.0);
    f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);

    let p = Vec2::new(600.0, 500.0);
    let t = f.pointer_move(p, Hover::None, 0.2);
    assert_eq!(t, Some(Transition::Exited));
    assert_eq!(f.current_target(), None);
    assert_eq!(f.size_target(), RING_IDLE_SIZE);
    assert_eq!(f.border_width_target(), RING_IDLE_BORDER);
    assert_eq!(f.background_alpha_target(), 0.0);
    assert_eq!(f.label_opacity_target(), 0.0);
    // Off magnetic targets the ring resumes trailing the raw pointer.
    assert_eq!(f.position_target(), p);
}

#[test]
fn leaving_while_idle_is_not_a_transition() {
    let mut f = CursorFollower::new();
    assert_eq!(f.pointer_move(Vec2::new(10.0, 10.0), Hover::None, 0.0), None);
    assert_eq!(f.pointer_move(Vec2::new(20.0, 20.0), Hover::None, 0.1), None);
}

#[test]
fn unknown_hover_preserves_the_prior_state() {
    let mut f = CursorFollower::new();
    let cfg = config(true, Label::Default, 120.0);
    f.pointer_move(Vec2::new(150.0, 120.0), over(1, &cfg), 0.0);
    let docked_position = f.position_target();

    // The event target vanished mid-event: no exit, no retargeting.
    let t = f.pointer_move(Vec2::new(400.0, 400.0), Hover::Unknown, 0.1);
    assert_eq!(t, None);
    assert_eq!(f.current_target(), Some(1));
    assert_eq!(f.size_target(), 120.0);
    assert_eq!(f.position_target(), docked_position);

    // A later well-formed event exits normally.
    let t = f.pointer_move(Vec2::new(400.0, 400.0), Hover::None, 0.2);
    assert_eq!(t, Some(Transition::Exited));
}
