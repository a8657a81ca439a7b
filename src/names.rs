use std::time::Duration;

pub const INDEX_URL: &str = "/";
pub const QUIZ_URL: &str = "/quiz";
pub const RESULTS_URL: &str = "/results";
pub const STATIC_URL: &str = "/static";
pub const PLAY_URL: &str = "/play";
pub const PLAY_ANSWER_URL: &str = "/play/answer";
pub const PLAY_NEXT_URL: &str = "/play/next";
pub const PLAY_BACK_URL: &str = "/play/back";
pub const PLAY_RESTART_URL: &str = "/play/restart";

pub const PLAY_COOKIE_NAME: &str = "quiz_play";
pub const QUIZ_ELEMENT_ID: &str = "quiz";
pub const QUIZ_TARGET: &str = "#quiz";
/// htmx event carrying the confetti options of an answer.
pub const FEEDBACK_EVENT: &str = "quiz-feedback";

pub const QUIZ_TITLE: &str = "Women’s Day Quick Quiz";

/// Collection (table) the result documents are written to.
pub const RESULTS_COLLECTION: &str = "results";

// Play-through presentation
pub const REVEAL_DELAY: Duration = Duration::from_millis(300);
pub const REMARK_EVERY: usize = 3;
pub const SUPPLEMENTARY_REMARK: &str = " – Real change doesn't always need complexity😉";
pub const CORRECT_MARK: &str = "🎉";
pub const WRONG_MARK: &str = "😔";

// Response messages
pub const NO_QUIZ_SETS: &str = "No quiz sets available";
pub const QUIZ_LOAD_FAILED: &str = "Error loading quiz data";
pub const RESULTS_SAVED: &str = "Quiz results saved successfully";
pub const RESULTS_FAILED: &str = "Error saving quiz results";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INTERNAL_ERROR: &str = "Internal server error";
