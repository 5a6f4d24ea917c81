#![cfg(target_arch = "wasm32")]
use crate::core::{Quiz, SpinAnimator, SpinConfig, WordPool};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod widget;

use widget::Widget;

thread_local! {
    static WIDGET: RefCell<Option<Widget>> = RefCell::new(None);
}

fn build_widget(document: web::Document) -> Widget {
    let pool = Rc::new(RefCell::new(WordPool::new()));
    let animator = Rc::new(RefCell::new(SpinAnimator::with_rng(
        pool.borrow().len(),
        SpinConfig::default(),
        StdRng::from_entropy(),
    )));
    let quiz = Rc::new(RefCell::new(Quiz::default()));
    // Opened on the first effect, after a user gesture.
    let synth = Rc::new(RefCell::new(audio::new_synth()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator: animator.clone(),
        synth: synth.clone(),
        pool: pool.clone(),
        quiz: quiz.clone(),
        document: document.clone(),
    }));
    let frame_loop = Rc::new(frame::AnimationLoop::new(frame_ctx));

    Widget {
        document,
        animator,
        pool,
        quiz,
        synth,
        frame_loop,
    }
}

// A page entering the back-forward cache is frozen, not destroyed; it keeps
// its widget so a restored page still spins.
fn wire_teardown() {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            log::info!("[wheel] page cached, keeping widget");
            return;
        }
        unmount();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("verb-wheel starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    // The spin button and the quiz input are the two required anchors.
    let _: web::HtmlElement = dom::element_as(&document, constants::SPIN_BUTTON_ID)?;
    let _: web::HtmlInputElement = dom::element_as(&document, constants::QUIZ_INPUT_ID)?;

    let widget = build_widget(document);
    widget.sync_pool();
    render::set_rotation(&widget.document, widget.animator.borrow().rotation());
    overlay::hide(&widget.document);

    events::wire_click_handlers(&widget);
    events::wire_global_keydown(widget.clone());
    events::wire_answer_keydown(widget.clone());
    wire_teardown();

    log::info!("[wheel] ready with {} words", widget.pool.borrow().len());
    WIDGET.with(|slot| *slot.borrow_mut() = Some(widget));
    Ok(())
}

/// Tear the widget down: cancels any pending animation frame and live spin.
/// Listeners stay attached but no longer change any state.
#[wasm_bindgen]
pub fn unmount() {
    let widget = WIDGET.with(|slot| slot.borrow_mut().take());
    if let Some(widget) = widget {
        widget.dispose();
        log::info!("[wheel] unmounted");
    }
}
