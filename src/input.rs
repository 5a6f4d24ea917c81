// Keyboard mapping for the wheel. Pure so it can be tested on the host.

/// Ctrl+Enter spins the wheel, unless a quiz is waiting for an answer.
#[inline]
pub fn is_spin_shortcut(key: &str, ctrl: bool, quiz_open: bool) -> bool {
    ctrl && key == "Enter" && !quiz_open
}

/// Enter in the answer box checks it, once.
#[inline]
pub fn is_answer_submit(key: &str, answered: bool) -> bool {
    key == "Enter" && !answered
}
