//! Hero wiring: entrance tweens and the CTA buttons' magnetic + X-ray
//! behavior.

use crate::dom;
use crate::effects;
use crate::frame::{Clock, IntroBinding, MagnetBinding};
use crate::targets::MagnetRegistry;
use site_core::constants::{
    BUTTON_REVEAL_RADIUS, HERO_CTA_DELAY_SECS, HERO_CTA_SECS, HERO_CTA_START_SCALE,
    HERO_SUBTITLE_DELAY_SECS, HERO_SUBTITLE_RISE_PX, HERO_SUBTITLE_SECS, HERO_TITLE_DELAY_SECS,
    HERO_TITLE_RISE_PX, HERO_TITLE_SECS,
};
use site_core::cursor::{Label, MagnetConfig};
use site_core::tween::{Channel, Ease};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Ring sizes while docked on the hero targets.
const CTA_RING_SIZE: f32 = 80.0;
const SCROLL_RING_SIZE: f32 = 60.0;

pub struct HeroWiring {
    pub magnets: Vec<MagnetBinding>,
    pub intros: Vec<IntroBinding>,
}

pub fn wire(
    document: &web::Document,
    registry: &Rc<RefCell<MagnetRegistry>>,
    clock: &Clock,
) -> anyhow::Result<HeroWiring> {
    let mut magnets = Vec::new();

    // Primary CTA: magnetic displacement plus the button-sized reveal.
    let primary = dom::by_id(document, "cta-primary")
        .ok_or_else(|| anyhow::anyhow!("missing #cta-primary"))?;
    let primary_xray = build_xray_overlay(document, &primary)?;
    effects::wire_reveal(&primary, primary_xray, BUTTON_REVEAL_RADIUS);
    registry.borrow_mut().register(
        &primary,
        MagnetConfig {
            sticky: true,
            label: Label::Hidden,
            ring_size: CTA_RING_SIZE,
        },
    );
    let motion = effects::wire_magnet(&primary, clock);
    magnets.push(MagnetBinding {
        element: primary,
        motion,
    });

    // Secondary CTA: reveal only, no displacement.
    let secondary = dom::by_id(document, "cta-secondary")
        .ok_or_else(|| anyhow::anyhow!("missing #cta-secondary"))?;
    let secondary_xray = build_xray_overlay(document, &secondary)?;
    effects::wire_reveal(&secondary, secondary_xray, BUTTON_REVEAL_RADIUS);
    registry.borrow_mut().register(
        &secondary,
        MagnetConfig {
            sticky: true,
            label: Label::Hidden,
            ring_size: CTA_RING_SIZE,
        },
    );

    if let Some(scroll) = dom::by_id(document, "scroll-indicator") {
        registry.borrow_mut().register(
            &scroll,
            MagnetConfig {
                sticky: true,
                label: Label::Custom("SCROLL".to_string()),
                ring_size: SCROLL_RING_SIZE,
            },
        );
    }

    let intros = entrance_tweens(document, clock);
    log::info!("[hero] wired, {} entrance tweens", intros.len());

    Ok(HeroWiring { magnets, intros })
}

/// Duplicate a button face into a color-inverted overlay revealed by the
/// mask. The overlay inherits the button's border radius from CSS.
fn build_xray_overlay(
    document: &web::Document,
    button: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let text = button.text_content().unwrap_or_default();
    let overlay = dom::create(document, "div", "xray-layer")
        .ok_or_else(|| anyhow::anyhow!("xray layer element"))?;
    let face = dom::create(document, "span", "xray-face")
        .ok_or_else(|| anyhow::anyhow!("xray face element"))?;
    face.set_text_content(Some(text.trim()));
    overlay
        .append_child(&face)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    button
        .append_child(&overlay)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(overlay)
}

/// Kinetic entrance: title and subtitle rise in, the CTA block scales in
/// with an overshoot, all on staggered delays.
fn entrance_tweens(document: &web::Document, clock: &Clock) -> Vec<IntroBinding> {
    let now = clock.seconds();
    let mut intros = Vec::new();

    if let Some(title) = dom::by_id(document, "hero-title") {
        let mut opacity = Channel::new(0.0);
        let mut rise = Channel::new(HERO_TITLE_RISE_PX);
        opacity.tween_delayed(1.0, HERO_TITLE_SECS, Ease::QuintOut, now, HERO_TITLE_DELAY_SECS);
        rise.tween_delayed(0.0, HERO_TITLE_SECS, Ease::QuintOut, now, HERO_TITLE_DELAY_SECS);
        hide_before_first_frame(&title);
        intros.push(IntroBinding {
            element: title,
            opacity,
            rise,
            scale: Channel::new(1.0),
        });
    }

    if let Some(subtitle) = dom::by_id(document, "hero-subtitle") {
        let mut opacity = Channel::new(0.0);
        let mut rise = Channel::new(HERO_SUBTITLE_RISE_PX);
        opacity.tween_delayed(
            1.0,
            HERO_SUBTITLE_SECS,
            Ease::QuartOut,
            now,
            HERO_SUBTITLE_DELAY_SECS,
        );
        rise.tween_delayed(
            0.0,
            HERO_SUBTITLE_SECS,
            Ease::QuartOut,
            now,
            HERO_SUBTITLE_DELAY_SECS,
        );
        hide_before_first_frame(&subtitle);
        intros.push(IntroBinding {
            element: subtitle,
            opacity,
            rise,
            scale: Channel::new(1.0),
        });
    }

    if let Some(cta) = dom::by_id(document, "hero-cta") {
        let mut opacity = Channel::new(0.0);
        let mut scale = Channel::new(HERO_CTA_START_SCALE);
        opacity.tween_delayed(1.0, HERO_CTA_SECS, Ease::BackOut, now, HERO_CTA_DELAY_SECS);
        scale.tween_delayed(1.0, HERO_CTA_SECS, Ease::BackOut, now, HERO_CTA_DELAY_SECS);
        hide_before_first_frame(&cta);
        intros.push(IntroBinding {
            element: cta,
            opacity,
            rise: Channel::new(0.0),
            scale,
        });
    }

    intros
}

fn hide_before_first_frame(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", "0");
}
