pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_answer_keydown, wire_global_keydown};
pub use pointer::wire_click_handlers;
