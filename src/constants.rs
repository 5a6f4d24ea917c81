// Element ids the widget binds to. The page markup must provide them.

// Wheel
pub const WHEEL_ROTOR_ID: &str = "wheel-rotor"; // rotated as a whole
pub const WHEEL_FACE_ID: &str = "wheel-face"; // conic-gradient background
pub const WHEEL_LABELS_ID: &str = "wheel-labels"; // one child per word
pub const SPIN_BUTTON_ID: &str = "spin-button";
pub const ALL_LEARNED_ID: &str = "all-learned";

// Quiz modal
pub const QUIZ_MODAL_ID: &str = "quiz-modal";
pub const QUIZ_VERB_ID: &str = "quiz-verb";
pub const QUIZ_INPUT_ID: &str = "quiz-input";
pub const QUIZ_CHECK_ID: &str = "quiz-check";
pub const QUIZ_ACTIONS_ID: &str = "quiz-actions";
pub const QUIZ_CONTINUE_ID: &str = "quiz-continue";
pub const QUIZ_REMOVE_ID: &str = "quiz-remove";
pub const QUIZ_FEEDBACK_ID: &str = "quiz-feedback";

// Feedback colors
pub const FEEDBACK_CORRECT_COLOR: &str = "#4ade80"; // green-400
pub const FEEDBACK_INCORRECT_COLOR: &str = "#fbbf24"; // amber-400

// Delay before focusing the answer box, so the modal is laid out first
pub const QUIZ_FOCUS_DELAY_MS: i32 = 50;
