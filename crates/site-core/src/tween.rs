//! Time-driven interpolation channels.
//!
//! Each [`Channel`] holds one animatable scalar and at most one active
//! tween. Retargeting a channel replaces the in-flight tween, starting
//! from the current sampled value; nothing is ever queued.

use crate::constants::{BACK_OVERSHOOT, ELASTIC_PERIOD};
use glam::Vec2;

/// Easing curves used by the pointer effects. All map `t` in `[0, 1]` to
/// an eased progress with `f(0) = 0` and `f(1) = 1`. `ElasticOut` and
/// `BackOut` overshoot 1 before settling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    CubicOut,
    QuartOut,
    QuintOut,
    ElasticOut,
    BackOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::QuartOut => 1.0 - (1.0 - t).powi(4),
            Ease::QuintOut => 1.0 - (1.0 - t).powi(5),
            Ease::ElasticOut => {
                let p = ELASTIC_PERIOD;
                (2.0_f32).powf(-10.0 * t) * ((t - p / 4.0) * std::f32::consts::TAU / p).sin() + 1.0
            }
            Ease::BackOut => {
                let s = BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration: f64,
    ease: Ease,
}

/// One animatable value with at most one interpolation in flight.
#[derive(Clone, Debug, Default)]
pub struct Channel {
    value: f32,
    tween: Option<Tween>,
}

impl Channel {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    /// Last sampled value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Final value the channel is heading toward (the current value when
    /// no tween is active).
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.value, |t| t.to)
    }

    pub fn is_settled(&self) -> bool {
        self.tween.is_none()
    }

    /// Jump to a value immediately, cancelling any active tween.
    pub fn jump(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    /// Retarget toward `to` over `duration` seconds. Any tween already in
    /// flight is superseded; a non-positive duration jumps.
    pub fn tween_to(&mut self, to: f32, duration: f64, ease: Ease, now: f64) {
        self.tween_delayed(to, duration, ease, now, 0.0);
    }

    /// As [`Channel::tween_to`] but holding the current value for `delay`
    /// seconds before the interpolation starts.
    pub fn tween_delayed(&mut self, to: f32, duration: f64, ease: Ease, now: f64, delay: f64) {
        let from = self.sample(now);
        if duration <= 0.0 && delay <= 0.0 {
            self.jump(to);
            return;
        }
        self.tween = Some(Tween {
            from,
            to,
            start: now + delay.max(0.0),
            duration: duration.max(0.0),
            ease,
        });
    }

    /// Advance to `now` and return the current value. Completed tweens
    /// settle exactly on their target.
    pub fn sample(&mut self, now: f64) -> f32 {
        if let Some(tw) = self.tween {
            if now < tw.start {
                self.value = tw.from;
            } else if tw.duration <= 0.0 || now >= tw.start + tw.duration {
                self.value = tw.to;
                self.tween = None;
            } else {
                let t = ((now - tw.start) / tw.duration) as f32;
                self.value = tw.from + (tw.to - tw.from) * tw.ease.apply(t);
            }
        }
        self.value
    }
}

/// A pair of channels animated together as a 2D point.
#[derive(Clone, Debug, Default)]
pub struct Channel2 {
    pub x: Channel,
    pub y: Channel,
}

impl Channel2 {
    pub fn new(value: Vec2) -> Self {
        Self {
            x: Channel::new(value.x),
            y: Channel::new(value.y),
        }
    }

    pub fn jump(&mut self, value: Vec2) {
        self.x.jump(value.x);
        self.y.jump(value.y);
    }

    pub fn tween_to(&mut self, to: Vec2, duration: f64, ease: Ease, now: f64) {
        self.x.tween_to(to.x, duration, ease, now);
        self.y.tween_to(to.y, duration, ease, now);
    }

    pub fn sample(&mut self, now: f64) -> Vec2 {
        Vec2::new(self.x.sample(now), self.y.sample(now))
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
