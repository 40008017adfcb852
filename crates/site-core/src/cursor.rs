//! Page-wide cursor follower: a raw dot plus an eased ring that docks
//! onto magnetic targets.

use crate::constants::{
    DEFAULT_LABEL, FOLLOW_FREE_SECS, FOLLOW_OVER_SECS, FOLLOW_STICKY_SECS, LABEL_HIDDEN_SCALE,
    LABEL_HIDE_SECS, LABEL_SHOW_DELAY_SECS, LABEL_SHOW_SECS, RING_DOCKED_BG_ALPHA,
    RING_DOCKED_BORDER, RING_DOCKED_SIZE, RING_IDLE_BORDER, RING_IDLE_SIZE, RING_MORPH_SECS,
};
use crate::geometry::Bounds;
use crate::tween::{Channel, Channel2, Ease};
use glam::Vec2;

/// Ring label behavior for a magnetic target: show the shared default
/// label, suppress the label entirely, or show custom text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Label {
    #[default]
    Default,
    Hidden,
    Custom(String),
}

/// Typed per-target configuration, attached when an element is registered
/// as magnetic.
#[derive(Clone, Debug, PartialEq)]
pub struct MagnetConfig {
    /// Dock the ring to the target center instead of trailing the pointer.
    pub sticky: bool,
    pub label: Label,
    /// Ring diameter while docked, in px.
    pub ring_size: f32,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            sticky: true,
            label: Label::Default,
            ring_size: RING_DOCKED_SIZE,
        }
    }
}

/// What the follower sees under the pointer on one move event.
#[derive(Clone, Debug)]
pub enum Hover<'a> {
    /// No magnetic ancestor under the pointer.
    None,
    /// Nearest enclosing magnetic element, with bounds read this event.
    Target {
        id: u32,
        config: &'a MagnetConfig,
        bounds: Bounds,
    },
    /// The event target vanished before it could be inspected; prior
    /// state is preserved untouched.
    Unknown,
}

/// Identity transition caused by a move event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Entered(u32),
    Exited,
}

/// Sampled visual state consumed by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct RingVisual {
    pub dot: Vec2,
    pub position: Vec2,
    pub size: f32,
    pub border_width: f32,
    pub background_alpha: f32,
    pub label_opacity: f32,
    pub label_scale: f32,
}

/// The page-lifetime follower singleton. All mutation funnels through
/// [`CursorFollower::pointer_move`]; at most one target is current at any
/// instant, and entry/exit animations fire only on identity change.
pub struct CursorFollower {
    dot: Vec2,
    position: Channel2,
    size: Channel,
    border_width: Channel,
    background_alpha: Channel,
    label_opacity: Channel,
    label_scale: Channel,
    label_text: String,
    current: Option<u32>,
    seen_pointer: bool,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            dot: Vec2::ZERO,
            position: Channel2::new(Vec2::ZERO),
            size: Channel::new(RING_IDLE_SIZE),
            border_width: Channel::new(RING_IDLE_BORDER),
            background_alpha: Channel::new(0.0),
            label_opacity: Channel::new(0.0),
            label_scale: Channel::new(LABEL_HIDDEN_SCALE),
            label_text: DEFAULT_LABEL.to_string(),
            current: None,
            seen_pointer: false,
        }
    }

    /// Identity of the currently docked target, if any.
    pub fn current_target(&self) -> Option<u32> {
        self.current
    }

    /// Current label text (meaningful while its opacity is non-zero).
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// Handle one pointer-move event. Returns the identity transition the
    /// event caused, if any. Entry and position retargeting issued by the
    /// same event start in the same frame.
    pub fn pointer_move(&mut self, pointer: Vec2, hover: Hover<'_>, now: f64) -> Option<Transition> {
        // The dot always tracks the literal pointer, with no easing.
        self.dot = pointer;
        if !self.seen_pointer {
            // First sample: place the ring instead of sweeping in from the origin.
            self.position.jump(pointer);
            self.seen_pointer = true;
        }

        match hover {
            Hover::Unknown => None,
            Hover::Target { id, config, bounds } => {
                let transition = (self.current != Some(id)).then(|| {
                    self.current = Some(id);
                    self.begin_dock(config, now);
                    Transition::Entered(id)
                });
                // The position retargets on every move while a target is active.
                if config.sticky {
                    self.position
                        .tween_to(bounds.center(), FOLLOW_STICKY_SECS, Ease::QuartOut, now);
                } else {
                    self.position
                        .tween_to(pointer, FOLLOW_OVER_SECS, Ease::CubicOut, now);
                }
                transition
            }
            Hover::None => {
                let transition = self.current.take().map(|_| {
                    self.end_dock(now);
                    Transition::Exited
                });
                self.position
                    .tween_to(pointer, FOLLOW_FREE_SECS, Ease::CubicOut, now);
                transition
            }
        }
    }

    fn begin_dock(&mut self, config: &MagnetConfig, now: f64) {
        log::debug!("[cursor] dock, ring size {}", config.ring_size);
        self.size
            .tween_to(config.ring_size, RING_MORPH_SECS, Ease::CubicOut, now);
        self.border_width
            .tween_to(RING_DOCKED_BORDER, RING_MORPH_SECS, Ease::CubicOut, now);
        self.background_alpha
            .tween_to(RING_DOCKED_BG_ALPHA, RING_MORPH_SECS, Ease::CubicOut, now);
        match &config.label {
            Label::Hidden => self.hide_label(now),
            Label::Default => {
                self.label_text = DEFAULT_LABEL.to_string();
                self.show_label(now);
            }
            Label::Custom(text) => {
                self.label_text = text.clone();
                self.show_label(now);
            }
        }
    }

    fn end_dock(&mut self, now: f64) {
        log::debug!("[cursor] undock");
        self.size
            .tween_to(RING_IDLE_SIZE, RING_MORPH_SECS, Ease::CubicOut, now);
        self.border_width
            .tween_to(RING_IDLE_BORDER, RING_MORPH_SECS, Ease::CubicOut, now);
        self.background_alpha
            .tween_to(0.0, RING_MORPH_SECS, Ease::CubicOut, now);
        self.hide_label(now);
    }

    fn show_label(&mut self, now: f64) {
        self.label_opacity
            .tween_delayed(1.0, LABEL_SHOW_SECS, Ease::CubicOut, now, LABEL_SHOW_DELAY_SECS);
        self.label_scale
            .tween_delayed(1.0, LABEL_SHOW_SECS, Ease::CubicOut, now, LABEL_SHOW_DELAY_SECS);
    }

    fn hide_label(&mut self, now: f64) {
        self.label_opacity
            .tween_to(0.0, LABEL_HIDE_SECS, Ease::CubicOut, now);
        self.label_scale
            .tween_to(LABEL_HIDDEN_SCALE, LABEL_HIDE_SECS, Ease::CubicOut, now);
    }

    /// Advance all channels to `now` and return the visual state.
    pub fn sample(&mut self, now: f64) -> RingVisual {
        RingVisual {
            dot: self.dot,
            position: self.position.sample(now),
            size: self.size.sample(now),
            border_width: self.border_width.sample(now),
            background_alpha: self.background_alpha.sample(now),
            label_opacity: self.label_opacity.sample(now),
            label_scale: self.label_scale.sample(now),
        }
    }

    pub fn position_target(&self) -> Vec2 {
        self.position.target()
    }

    pub fn size_target(&self) -> f32 {
        self.size.target()
    }

    pub fn border_width_target(&self) -> f32 {
        self.border_width.target()
    }

    pub fn background_alpha_target(&self) -> f32 {
        self.background_alpha.target()
    }

    pub fn label_opacity_target(&self) -> f32 {
        self.label_opacity.target()
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}
