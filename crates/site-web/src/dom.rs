use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Create an element with a class attribute already applied.
pub fn create(document: &web::Document, tag: &str, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        let _ = el.set_attribute("class", class);
    }
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Write one inline style property, ignoring failures.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}
