use crate::audio::Synth;
use crate::core::{Quiz, SpinAnimator, WordPool};
use crate::overlay;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame view of the widget state.
pub struct FrameContext {
    pub animator: Rc<RefCell<SpinAnimator>>,
    pub synth: Rc<RefCell<Synth>>,
    pub pool: Rc<RefCell<WordPool>>,
    pub quiz: Rc<RefCell<Quiz>>,
    pub document: web::Document,
}

impl FrameContext {
    /// Step the spin. Returns whether another frame is wanted.
    pub fn frame(&mut self) -> bool {
        let now = instant::now();
        let Some(frame) = self.animator.borrow_mut().advance(now) else {
            return false;
        };

        render::set_rotation(&self.document, frame.rotation);
        // Ticks crossed in one frame start together and sound as one louder click.
        if !frame.ticks.is_empty() {
            let mut synth = self.synth.borrow_mut();
            for _ in &frame.ticks {
                synth.tick();
            }
        }

        match frame.outcome {
            Some(index) => {
                self.finish(index);
                false
            }
            None => true,
        }
    }

    fn finish(&mut self, index: usize) {
        let word = self.pool.borrow().get(index);
        log::info!(
            "[spin] stopped at {:.1}deg on #{} ({})",
            self.animator.borrow().rotation(),
            index,
            word.unwrap_or("-")
        );
        let has_words = !self.pool.borrow().is_empty();
        render::set_spin_enabled(&self.document, has_words);
        if let Some(verb) = word {
            self.quiz.borrow_mut().open(verb);
            overlay::show(&self.document, verb);
        }
    }
}

/// Owns the `requestAnimationFrame` registration driving a [`FrameContext`].
///
/// Frames are requested only while the context asks for more. The pending
/// frame is cancelled and the callback released on [`AnimationLoop::cancel`]
/// or on drop; a cancelled loop never schedules again.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let id_clone = frame_id.clone();
        let cancelled_clone = cancelled.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            id_clone.set(None);
            if cancelled_clone.get() {
                return;
            }
            if frame_ctx.borrow_mut().frame() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    id_clone.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            tick,
            frame_id,
            cancelled,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.frame_id.get().is_some()
    }

    /// Request a frame unless one is already pending.
    pub fn resume(&self) {
        if self.cancelled.get() || self.is_pending() {
            return;
        }
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.frame_id.set(request_frame(cb));
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.frame_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> tick cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
