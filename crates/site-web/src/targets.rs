//! Registry of magnetic targets: typed configuration keyed by a small id
//! stamped onto the element, resolved per event via the nearest enclosing
//! match.

use fnv::FnvHashMap;
use site_core::cursor::MagnetConfig;
use site_core::geometry::Bounds;
use wasm_bindgen::JsCast;
use web_sys as web;

const MAGNET_ATTR: &str = "data-magnet";
const MAGNET_SELECTOR: &str = "[data-magnet]";

#[derive(Default)]
pub struct MagnetRegistry {
    next_id: u32,
    configs: FnvHashMap<u32, MagnetConfig>,
}

impl MagnetRegistry {
    /// Mark an element as magnetic and attach its configuration.
    pub fn register(&mut self, element: &web::Element, config: MagnetConfig) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let _ = element.set_attribute(MAGNET_ATTR, &id.to_string());
        self.configs.insert(id, config);
        id
    }

    pub fn config(&self, id: u32) -> Option<&MagnetConfig> {
        self.configs.get(&id)
    }
}

/// Outcome of inspecting one pointer event for a magnetic ancestor.
pub enum Resolution {
    None,
    Target { id: u32, bounds: Bounds },
    /// The event target vanished or could not be inspected; the caller
    /// keeps its prior state for this event.
    Unknown,
}

/// Nearest magnetic ancestor-or-self of the event target, with its bounds
/// read now. Non-magnetic descendants of a magnetic element resolve to
/// that element.
pub fn resolve(ev: &web::MouseEvent) -> Resolution {
    let element = match ev.target() {
        Some(t) => match t.dyn_into::<web::Element>() {
            Ok(el) => el,
            Err(_) => return Resolution::None,
        },
        None => return Resolution::None,
    };
    if !element.is_connected() {
        return Resolution::Unknown;
    }
    match element.closest(MAGNET_SELECTOR) {
        Ok(Some(hit)) => {
            let id = match hit.get_attribute(MAGNET_ATTR).and_then(|v| v.parse().ok()) {
                Some(id) => id,
                None => return Resolution::Unknown,
            };
            let rect = hit.get_bounding_client_rect();
            Resolution::Target {
                id,
                bounds: Bounds::new(
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                ),
            }
        }
        Ok(None) => Resolution::None,
        Err(_) => Resolution::Unknown,
    }
}
