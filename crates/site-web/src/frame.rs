//! requestAnimationFrame loop: samples the interpolation channels and
//! writes their current values to element styles.

use crate::cursor::{self, CursorOverlay};
use crate::dom;
use instant::Instant;
use site_core::cursor::CursorFollower;
use site_core::magnet::MagneticMotion;
use site_core::tween::Channel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared monotonic clock; all tween timestamps are seconds since
/// startup.
#[derive(Clone)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn seconds(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// One element whose transform is driven by a magnetic motion.
pub struct MagnetBinding {
    pub element: web::HtmlElement,
    pub motion: Rc<RefCell<MagneticMotion>>,
}

/// One element animated in on page load.
pub struct IntroBinding {
    pub element: web::HtmlElement,
    pub opacity: Channel,
    pub rise: Channel,
    pub scale: Channel,
}

impl IntroBinding {
    fn is_settled(&self) -> bool {
        self.opacity.is_settled() && self.rise.is_settled() && self.scale.is_settled()
    }
}

pub struct FrameContext {
    pub clock: Clock,
    pub follower: Rc<RefCell<CursorFollower>>,
    pub overlay: CursorOverlay,
    pub magnets: Vec<MagnetBinding>,
    pub intros: Vec<IntroBinding>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.seconds();

        let visual = self.follower.borrow_mut().sample(now);
        cursor::apply(&self.overlay, &visual);

        for binding in &self.magnets {
            let offset = binding.motion.borrow_mut().sample(now);
            dom::set_style(
                &binding.element,
                "transform",
                &format!("translate({}px, {}px)", offset.x, offset.y),
            );
        }

        for intro in &mut self.intros {
            if intro.is_settled() {
                continue;
            }
            let opacity = intro.opacity.sample(now);
            let rise = intro.rise.sample(now);
            let scale = intro.scale.sample(now);
            dom::set_style(&intro.element, "opacity", &opacity.to_string());
            dom::set_style(
                &intro.element,
                "transform",
                &format!("translateY({}px) scale({})", rise, scale),
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
