use crate::constants::QUIZ_INPUT_ID;
use crate::input;
use crate::widget::Widget;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, widget: &Widget) {
    let quiz_open = widget.quiz.borrow().is_open();
    if input::is_spin_shortcut(&ev.key(), ev.ctrl_key(), quiz_open) {
        ev.prevent_default();
        widget.request_spin();
    }
}

pub fn wire_global_keydown(widget: Widget) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &widget);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Enter in the answer box checks the answer
pub fn wire_answer_keydown(widget: Widget) {
    let Some(el) = widget.document.get_element_by_id(QUIZ_INPUT_ID) else {
        log::warn!("[keys] no #{}", QUIZ_INPUT_ID);
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let answered = widget.quiz.borrow().verdict().is_some();
        if input::is_answer_submit(&ev.key(), answered) {
            ev.prevent_default();
            widget.submit_answer();
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
