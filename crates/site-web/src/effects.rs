//! Per-element effect wiring shared by the hero buttons and the grid
//! cards.

use crate::dom;
use crate::frame::Clock;
use glam::Vec2;
use site_core::geometry::Bounds;
use site_core::magnet::MagneticMotion;
use site_core::reveal::RevealMask;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element-relative pointer position with the bounds read for this event.
/// `None` when the element has left the document between event dispatch
/// and lookup; callers keep their prior state in that case.
pub fn element_relative(ev: &web::MouseEvent, element: &web::Element) -> Option<(Vec2, Bounds)> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    let bounds = Bounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    );
    let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    Some((bounds.relative(pointer), bounds))
}

/// Write the coupled opacity + mask of a reveal layer. Both always change
/// together, so a stale mask can never stay visible.
pub fn apply_reveal(layer: &web::HtmlElement, reveal: &RevealMask) {
    dom::set_style(layer, "opacity", &reveal.opacity().to_string());
    match reveal.mask_expression() {
        Some(mask) => {
            dom::set_style(layer, "mask-image", &mask);
            dom::set_style(layer, "-webkit-mask-image", &mask);
        }
        None => {
            dom::clear_style(layer, "mask-image");
            dom::clear_style(layer, "-webkit-mask-image");
        }
    }
}

/// Attach magnetic displacement to an element. The returned motion is
/// sampled by the frame loop, which owns writing the transform.
pub fn wire_magnet(element: &web::HtmlElement, clock: &Clock) -> Rc<RefCell<MagneticMotion>> {
    let motion = Rc::new(RefCell::new(MagneticMotion::new()));

    {
        let motion_m = motion.clone();
        let el = element.clone();
        let clock = clock.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some((relative, bounds)) = element_relative(&ev, &el) {
                motion_m
                    .borrow_mut()
                    .pointer_move(relative, &bounds, clock.seconds());
            }
        }) as Box<dyn FnMut(_)>);
        let _ = element
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let motion_m = motion.clone();
        let clock = clock.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                motion_m.borrow_mut().pointer_leave(clock.seconds());
            }) as Box<dyn FnMut(_)>);
        let _ = element
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    motion
}

/// Attach an X-ray reveal to an element, driving the given inverted
/// layer. Mask updates are written directly from the handlers; they are
/// positional, not time-eased.
pub fn wire_reveal(element: &web::HtmlElement, layer: web::HtmlElement, radius: f32) {
    let reveal = Rc::new(RefCell::new(RevealMask::new(radius)));

    {
        let reveal_m = reveal.clone();
        let el = element.clone();
        let layer_m = layer.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some((relative, _)) = element_relative(&ev, &el) {
                let mut r = reveal_m.borrow_mut();
                r.enter(relative);
                apply_reveal(&layer_m, &r);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = element
            .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let reveal_m = reveal.clone();
        let el = element.clone();
        let layer_m = layer.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some((relative, _)) = element_relative(&ev, &el) {
                let mut r = reveal_m.borrow_mut();
                r.pointer_move(relative);
                apply_reveal(&layer_m, &r);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = element
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let reveal_m = reveal.clone();
        let layer_m = layer;
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                let mut r = reveal_m.borrow_mut();
                r.leave();
                apply_reveal(&layer_m, &r);
            }) as Box<dyn FnMut(_)>);
        let _ = element
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
