use crate::audio::Synth;
use crate::core::{feedback_message, Quiz, SpinAnimator, WordPool};
use crate::frame::AnimationLoop;
use crate::overlay;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles behind every DOM callback.
#[derive(Clone)]
pub struct Widget {
    pub document: web::Document,
    pub animator: Rc<RefCell<SpinAnimator>>,
    pub pool: Rc<RefCell<WordPool>>,
    pub quiz: Rc<RefCell<Quiz>>,
    pub synth: Rc<RefCell<Synth>>,
    pub frame_loop: Rc<AnimationLoop>,
}

impl Widget {
    /// Listeners outlive the widget, so every handler checks this first.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.animator.borrow().is_retired()
    }

    /// Spin on a click or Ctrl+Enter. Ignored while spinning, while a quiz is
    /// open, once every word is learned, or after teardown.
    pub fn request_spin(&self) {
        if self.is_disposed() || self.quiz.borrow().is_open() {
            return;
        }
        let plan = self.animator.borrow_mut().start_spin(instant::now());
        let Some(plan) = plan else {
            log::debug!("[spin] request ignored");
            return;
        };
        log::info!(
            "[spin] {:.1}deg -> {:.1}deg over {} segments",
            plan.start_rotation,
            plan.target_rotation,
            self.pool.borrow().len()
        );
        render::set_spin_enabled(&self.document, false);
        self.frame_loop.resume();
    }

    pub fn submit_answer(&self) {
        if self.is_disposed() {
            return;
        }
        let input = overlay::answer(&self.document);
        let (verb, verdict) = {
            let mut quiz = self.quiz.borrow_mut();
            (quiz.verb(), quiz.submit(&input))
        };
        let (Some(verb), Some(correct)) = (verb, verdict) else {
            return;
        };
        log::info!("[quiz] {} -> {:?} correct={}", verb, input.trim(), correct);
        {
            let mut synth = self.synth.borrow_mut();
            if correct {
                synth.correct();
            } else {
                synth.incorrect();
            }
        }
        overlay::show_feedback(&self.document, &feedback_message(verb, correct), correct);
    }

    /// "Continue": close the quiz, keep the word.
    pub fn close_quiz(&self) {
        if self.is_disposed() {
            return;
        }
        self.quiz.borrow_mut().close();
        overlay::hide(&self.document);
    }

    /// "Remove Word": close the quiz and retire the word from the wheel.
    pub fn remove_word(&self) {
        if self.is_disposed() {
            return;
        }
        let verb = {
            let mut quiz = self.quiz.borrow_mut();
            if !quiz.can_remove() {
                return;
            }
            quiz.close()
        };
        overlay::hide(&self.document);
        if let Some(verb) = verb {
            if self.pool.borrow_mut().remove(verb) {
                log::info!("[quiz] learned {}, {} left", verb, self.pool.borrow().len());
                self.sync_pool();
            }
        }
    }

    /// Push the word pool into the wheel geometry and markup.
    pub fn sync_pool(&self) {
        let pool = self.pool.borrow();
        self.animator.borrow_mut().set_word_count(pool.len());
        if let Err(e) = render::render_words(&self.document, pool.words()) {
            log::error!("[wheel] render error: {:?}", e);
        }
        let idle = !self.animator.borrow().is_spinning();
        render::set_spin_enabled(&self.document, idle && !pool.is_empty());
    }

    /// Stop the frame loop, drop any live spin and close the quiz. The
    /// forgotten listeners still hold clones; they become no-ops from here.
    pub fn dispose(&self) {
        self.frame_loop.cancel();
        if self.animator.borrow_mut().retire() {
            log::info!("[spin] cancelled by teardown");
        }
        self.quiz.borrow_mut().close();
        render::set_spin_enabled(&self.document, false);
    }
}
