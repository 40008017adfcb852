#![cfg(target_arch = "wasm32")]
//! Front-end entry: assembles the page effects and starts the frame loop.

mod cards;
mod cursor;
mod dom;
mod effects;
mod frame;
mod hero;
mod targets;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let clock = frame::Clock::start();
    let registry = Rc::new(RefCell::new(targets::MagnetRegistry::default()));

    let hero = hero::wire(&document, &registry, &clock)?;
    cards::build(&document, &registry)?;

    let overlay = cursor::mount(&document)?;
    let follower = Rc::new(RefCell::new(site_core::cursor::CursorFollower::new()));
    cursor::wire_pointer_move(
        follower.clone(),
        registry,
        overlay.label.clone(),
        clock.clone(),
    );

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        clock,
        follower,
        overlay,
        magnets: hero.magnets,
        intros: hero.intros,
    })));

    Ok(())
}
