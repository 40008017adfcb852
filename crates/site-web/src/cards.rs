//! Bento grid: builds one card per project and wires its X-ray reveal
//! and pointer glow.

use crate::dom;
use crate::effects;
use crate::targets::MagnetRegistry;
use site_core::constants::CARD_REVEAL_RADIUS;
use site_core::content::{Project, Span, PROJECTS};
use site_core::cursor::{Label, MagnetConfig};
use site_core::reveal::RevealMask;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CARD_RING_SIZE: f32 = 120.0;

// Accent color of the hover glow, matching the primary purple at low alpha.
const GLOW_COLOR: &str = "rgba(168, 85, 247, 0.15)";

pub fn build(document: &web::Document, registry: &Rc<RefCell<MagnetRegistry>>) -> anyhow::Result<()> {
    let grid =
        dom::by_id(document, "work-grid").ok_or_else(|| anyhow::anyhow!("missing #work-grid"))?;
    for project in PROJECTS {
        let card = build_card(document, project)?;
        grid.append_child(&card.root)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        registry.borrow_mut().register(
            &card.root,
            MagnetConfig {
                sticky: false,
                label: Label::Default,
                ring_size: CARD_RING_SIZE,
            },
        );
        wire_card(Rc::new(card));
    }
    log::info!("[grid] built {} cards", PROJECTS.len());
    Ok(())
}

struct CardElements {
    root: web::HtmlElement,
    glow: web::HtmlElement,
    content: web::HtmlElement,
    xray: web::HtmlElement,
}

fn span_class(span: Span) -> &'static str {
    match span {
        Span::Normal => "",
        Span::Wide => "card-wide",
        Span::Tall => "card-tall",
    }
}

fn build_card(document: &web::Document, project: &Project) -> anyhow::Result<CardElements> {
    let class = match span_class(project.span) {
        "" => "card".to_string(),
        spanned => format!("card {}", spanned),
    };
    let root = dom::create(document, "article", &class)
        .ok_or_else(|| anyhow::anyhow!("card element"))?;
    let _ = root.set_attribute("data-project", project.id);

    // Stacked layers: glass glow, normal content, inverted duplicate,
    // gradient border. The duplicate mirrors the content markup exactly.
    let glow = dom::create(document, "div", "card-glow")
        .ok_or_else(|| anyhow::anyhow!("card glow element"))?;

    let content = dom::create(document, "div", "card-content")
        .ok_or_else(|| anyhow::anyhow!("card content element"))?;
    content
        .append_child(&build_card_face(document, project)?)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let xray = dom::create(document, "div", "card-xray")
        .ok_or_else(|| anyhow::anyhow!("card xray element"))?;
    xray.append_child(&build_card_face(document, project)?)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let border = dom::create(document, "div", "card-border")
        .ok_or_else(|| anyhow::anyhow!("card border element"))?;
    dom::set_style(
        &border,
        "background-image",
        &format!(
            "linear-gradient(#111827, #111827), linear-gradient(135deg, {}, {})",
            project.gradient.from, project.gradient.to
        ),
    );

    for layer in [&glow, &content, &xray, &border] {
        root.append_child(layer)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }

    Ok(CardElements {
        root,
        glow,
        content,
        xray,
    })
}

/// One copy of the card face; built twice so the inverted layer mirrors
/// the normal layer.
fn build_card_face(document: &web::Document, project: &Project) -> anyhow::Result<web::HtmlElement> {
    let face =
        dom::create(document, "div", "card-face").ok_or_else(|| anyhow::anyhow!("card face"))?;

    let badge =
        dom::create(document, "span", "card-badge").ok_or_else(|| anyhow::anyhow!("card badge"))?;
    badge.set_text_content(Some(project.tech_stack.first().copied().unwrap_or("")));
    dom::set_style(
        &badge,
        "background-image",
        &format!(
            "linear-gradient(90deg, {}, {})",
            project.gradient.from, project.gradient.to
        ),
    );

    let title =
        dom::create(document, "h3", "card-title").ok_or_else(|| anyhow::anyhow!("card title"))?;
    title.set_text_content(Some(project.title));

    let description = dom::create(document, "p", "card-description")
        .ok_or_else(|| anyhow::anyhow!("card description"))?;
    description.set_text_content(Some(project.description));

    let tags =
        dom::create(document, "div", "card-tags").ok_or_else(|| anyhow::anyhow!("card tags"))?;
    for tech in project.tech_stack {
        let tag =
            dom::create(document, "span", "card-tag").ok_or_else(|| anyhow::anyhow!("card tag"))?;
        tag.set_text_content(Some(tech));
        tags.append_child(&tag)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }

    let link =
        dom::create(document, "span", "card-link").ok_or_else(|| anyhow::anyhow!("card link"))?;
    link.set_text_content(Some("View Project"));

    for child in [&badge, &title, &description, &tags, &link] {
        face.append_child(child)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    Ok(face)
}

fn wire_card(card: Rc<CardElements>) {
    let reveal = Rc::new(RefCell::new(RevealMask::new(CARD_REVEAL_RADIUS)));

    {
        let card_m = card.clone();
        let reveal_m = reveal.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some((relative, _)) = effects::element_relative(&ev, &card_m.root) {
                let mut r = reveal_m.borrow_mut();
                r.enter(relative);
                apply_card(&card_m, &r);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = card
            .root
            .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let card_m = card.clone();
        let reveal_m = reveal.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some((relative, _)) = effects::element_relative(&ev, &card_m.root) {
                let mut r = reveal_m.borrow_mut();
                r.pointer_move(relative);
                apply_card(&card_m, &r);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = card
            .root
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let card_m = card.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                let mut r = reveal.borrow_mut();
                r.leave();
                apply_card(&card_m, &r);
            }) as Box<dyn FnMut(_)>);
        let _ = card
            .root
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Write all three pointer-driven layers of one card from a single reveal
/// state, keeping their visibility coupled.
fn apply_card(card: &CardElements, reveal: &RevealMask) {
    effects::apply_reveal(&card.xray, reveal);

    // The normal layer carries the complementary cutout so the stacked
    // layers never double-expose.
    match reveal.cutout_expression() {
        Some(mask) => {
            dom::set_style(&card.content, "mask-image", &mask);
            dom::set_style(&card.content, "-webkit-mask-image", &mask);
        }
        None => {
            dom::clear_style(&card.content, "mask-image");
            dom::clear_style(&card.content, "-webkit-mask-image");
        }
    }

    match reveal.disc() {
        Some((center, _)) => {
            dom::set_style(&card.glow, "opacity", "1");
            dom::set_style(
                &card.glow,
                "background",
                &format!(
                    "radial-gradient(600px circle at {}px {}px, {}, transparent 40%)",
                    center.x, center.y, GLOW_COLOR
                ),
            );
        }
        None => {
            dom::set_style(&card.glow, "opacity", "0");
        }
    }
}
