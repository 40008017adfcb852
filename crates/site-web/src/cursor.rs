//! Cursor overlay: a dot that tracks the raw pointer and a ring that
//! docks onto magnetic targets.

use crate::dom;
use crate::frame::Clock;
use crate::targets::{self, MagnetRegistry, Resolution};
use glam::Vec2;
use site_core::cursor::{CursorFollower, Hover, RingVisual, Transition};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CursorOverlay {
    pub dot: web::HtmlElement,
    pub ring: web::HtmlElement,
    pub label: web::HtmlElement,
}

/// Build the overlay elements and append them to the body.
pub fn mount(document: &web::Document) -> anyhow::Result<CursorOverlay> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let root = dom::create(document, "div", "cursor-overlay")
        .ok_or_else(|| anyhow::anyhow!("cursor overlay element"))?;
    let dot = dom::create(document, "div", "cursor-dot")
        .ok_or_else(|| anyhow::anyhow!("cursor dot element"))?;
    let ring = dom::create(document, "div", "cursor-ring")
        .ok_or_else(|| anyhow::anyhow!("cursor ring element"))?;
    let label = dom::create(document, "span", "cursor-label")
        .ok_or_else(|| anyhow::anyhow!("cursor label element"))?;

    label.set_text_content(Some(site_core::constants::DEFAULT_LABEL));
    ring.append_child(&label)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    root.append_child(&dot)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    root.append_child(&ring)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    body.append_child(&root)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    Ok(CursorOverlay { dot, ring, label })
}

/// Window-level pointermove wiring. All follower mutation funnels through
/// this one handler; the frame loop only samples.
pub fn wire_pointer_move(
    follower: Rc<RefCell<CursorFollower>>,
    registry: Rc<RefCell<MagnetRegistry>>,
    label: web::HtmlElement,
    clock: Clock,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let now = clock.seconds();
        let registry = registry.borrow();
        let hover = match targets::resolve(&ev) {
            Resolution::Target { id, bounds } => match registry.config(id) {
                Some(config) => Hover::Target { id, config, bounds },
                // Stale marker attribute with no registered config.
                None => Hover::Unknown,
            },
            Resolution::None => Hover::None,
            Resolution::Unknown => Hover::Unknown,
        };
        let mut follower = follower.borrow_mut();
        match follower.pointer_move(pointer, hover, now) {
            Some(Transition::Entered(id)) => {
                label.set_text_content(Some(follower.label_text()));
                log::info!("[cursor] docked on target {}", id);
            }
            Some(Transition::Exited) => log::info!("[cursor] released"),
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Write one sampled frame to the overlay styles.
pub fn apply(overlay: &CursorOverlay, visual: &RingVisual) {
    dom::set_style(
        &overlay.dot,
        "transform",
        &format!(
            "translate3d({}px, {}px, 0) translate(-50%, -50%)",
            visual.dot.x, visual.dot.y
        ),
    );
    dom::set_style(
        &overlay.ring,
        "transform",
        &format!(
            "translate3d({}px, {}px, 0) translate(-50%, -50%)",
            visual.position.x, visual.position.y
        ),
    );
    dom::set_style(&overlay.ring, "width", &format!("{}px", visual.size));
    dom::set_style(&overlay.ring, "height", &format!("{}px", visual.size));
    dom::set_style(
        &overlay.ring,
        "border-width",
        &format!("{}px", visual.border_width),
    );
    dom::set_style(
        &overlay.ring,
        "background-color",
        &format!("rgba(255, 255, 255, {})", visual.background_alpha),
    );
    dom::set_style(&overlay.label, "opacity", &visual.label_opacity.to_string());
    dom::set_style(
        &overlay.label,
        "transform",
        &format!("scale({})", visual.label_scale),
    );
}
