// Tuning constants for the pointer-driven effects.

// Magnetic displacement
pub const MAGNET_DAMPING: f32 = 0.3; // fraction of the center offset applied as translation
pub const MAGNET_FOLLOW_SECS: f64 = 0.3;
pub const MAGNET_RETURN_SECS: f64 = 0.5;

// Reveal masks
pub const BUTTON_REVEAL_RADIUS: f32 = 50.0;
pub const CARD_REVEAL_RADIUS: f32 = 100.0;
pub const REVEAL_EDGE_SOFTNESS: f32 = 1.0; // soft edge width in px

// Cursor ring
pub const RING_IDLE_SIZE: f32 = 30.0;
pub const RING_DOCKED_SIZE: f32 = 100.0; // default; targets may override
pub const RING_IDLE_BORDER: f32 = 2.0;
pub const RING_DOCKED_BORDER: f32 = 1.0;
pub const RING_DOCKED_BG_ALPHA: f32 = 0.05;
pub const RING_MORPH_SECS: f64 = 0.4;

// Ring position easing: docked-to-center is deliberately slower than the
// trailing follow so the ring visibly settles onto sticky targets.
pub const FOLLOW_STICKY_SECS: f64 = 0.6;
pub const FOLLOW_OVER_SECS: f64 = 0.15;
pub const FOLLOW_FREE_SECS: f64 = 0.5;

// Ring label
pub const DEFAULT_LABEL: &str = "EXPLORE";
pub const LABEL_SHOW_SECS: f64 = 0.3;
pub const LABEL_SHOW_DELAY_SECS: f64 = 0.1;
pub const LABEL_HIDE_SECS: f64 = 0.2;
pub const LABEL_HIDDEN_SCALE: f32 = 0.5;

// Easing shape parameters
pub const ELASTIC_PERIOD: f32 = 0.3;
pub const BACK_OVERSHOOT: f32 = 1.7;

// Hero entrance
pub const HERO_TITLE_SECS: f64 = 1.2;
pub const HERO_TITLE_DELAY_SECS: f64 = 0.3;
pub const HERO_TITLE_RISE_PX: f32 = 100.0;
pub const HERO_SUBTITLE_SECS: f64 = 1.0;
pub const HERO_SUBTITLE_DELAY_SECS: f64 = 0.8;
pub const HERO_SUBTITLE_RISE_PX: f32 = 50.0;
pub const HERO_CTA_SECS: f64 = 0.8;
pub const HERO_CTA_DELAY_SECS: f64 = 1.2;
pub const HERO_CTA_START_SCALE: f32 = 0.8;
