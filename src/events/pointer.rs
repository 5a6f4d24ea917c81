use crate::constants::{QUIZ_CHECK_ID, QUIZ_CONTINUE_ID, QUIZ_REMOVE_ID, SPIN_BUTTON_ID};
use crate::dom;
use crate::widget::Widget;

pub fn wire_click_handlers(widget: &Widget) {
    let document = widget.document.clone();

    let w = widget.clone();
    dom::add_click_listener(&document, SPIN_BUTTON_ID, move || w.request_spin());

    let w = widget.clone();
    dom::add_click_listener(&document, QUIZ_CHECK_ID, move || w.submit_answer());

    let w = widget.clone();
    dom::add_click_listener(&document, QUIZ_CONTINUE_ID, move || w.close_quiz());

    let w = widget.clone();
    dom::add_click_listener(&document, QUIZ_REMOVE_ID, move || w.remove_word());
}
