use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn answer_input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(QUIZ_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Open the quiz for `verb` with a fresh answer box.
pub fn show(document: &web::Document, verb: &str) {
    if let Some(el) = document.get_element_by_id(QUIZ_VERB_ID) {
        el.set_text_content(Some(verb.to_uppercase().as_str()));
    }
    if let Some(input) = answer_input(document) {
        input.set_value("");
        input.set_disabled(false);
    }
    if let Some(el) = document.get_element_by_id(QUIZ_FEEDBACK_ID) {
        el.set_text_content(None);
    }
    dom::set_visible(document, QUIZ_FEEDBACK_ID, false);
    dom::set_visible(document, QUIZ_CHECK_ID, true);
    dom::set_visible(document, QUIZ_ACTIONS_ID, false);
    dom::set_visible(document, QUIZ_MODAL_ID, true);
    focus_answer_later();
}

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_visible(document, QUIZ_MODAL_ID, false);
}

/// Current text in the answer box.
pub fn answer(document: &web::Document) -> String {
    answer_input(document).map(|i| i.value()).unwrap_or_default()
}

/// Lock the answer box and show the verdict; "Remove Word" only after a correct answer.
pub fn show_feedback(document: &web::Document, message: &str, correct: bool) {
    if let Some(input) = answer_input(document) {
        input.set_disabled(true);
    }
    if let Some(el) = dom::html_element(document, QUIZ_FEEDBACK_ID) {
        el.set_text_content(Some(message));
        let color = if correct {
            FEEDBACK_CORRECT_COLOR
        } else {
            FEEDBACK_INCORRECT_COLOR
        };
        _ = el.style().set_property("color", color);
    }
    dom::set_visible(document, QUIZ_FEEDBACK_ID, true);
    dom::set_visible(document, QUIZ_CHECK_ID, false);
    dom::set_visible(document, QUIZ_REMOVE_ID, correct);
    dom::set_visible(document, QUIZ_ACTIONS_ID, true);
}

// The input is not focusable until the modal has been laid out.
fn focus_answer_later() {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once_into_js(move || {
        if let Some(doc) = dom::window_document() {
            if let Some(input) = answer_input(&doc) {
                _ = input.focus();
            }
        }
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        QUIZ_FOCUS_DELAY_MS,
    );
}
