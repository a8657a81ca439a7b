use maud::{html, Markup};
use serde_json::json;

use crate::{
    names,
    session::{OptionView, Phase, Progress, QuizSession},
};

fn option_class(option: &OptionView) -> &'static str {
    match (option.selected, option.correct) {
        (true, true) => "option selected correct",
        (true, false) => "option selected wrong",
        (false, _) => "option",
    }
}

fn option_row(option: &OptionView, answered: bool) -> Markup {
    let bullet = html! {
        span class=(if option.shaking { "bullet shake" } else { "bullet" }) {
            (option.mark.label())
        }
        (option.text)
    };
    html! {
        @if answered {
            div class=(option_class(option)) { (bullet) }
        } @else {
            div class=(option_class(option))
                hx-post=(names::PLAY_ANSWER_URL)
                hx-vals=(json!({ "option": option.text }).to_string())
                hx-target=(names::QUIZ_TARGET) {
                (bullet)
            }
        }
    }
}

/// Fetches the fragment again once the deferred reveal has landed.
fn reveal_poll() -> Markup {
    let trigger = format!("load delay:{}ms", names::REVEAL_DELAY.as_millis());
    html! {
        div hx-get=(names::PLAY_URL) hx-trigger=(trigger) hx-target=(names::QUIZ_TARGET) {}
    }
}

fn reveal_section(session: &QuizSession, progress: &Progress) -> Markup {
    let question = progress.current();
    html! {
        @if let Some(text) = session.reveal_text() {
            div."answer-section" {
                p."correct-answer" { (text) }
                div."story-card" {
                    img."story-image" src=(question.image_ref) alt="Inventor";
                    p."story" { (question.story_text) }
                }
            }
        }
    }
}

fn question_card(session: &QuizSession, progress: &Progress) -> Markup {
    let answered = progress.selected().is_some();
    html! {
        h2."quiz-title" { (names::QUIZ_TITLE) }
        div."card" {
            p."question" { (progress.current().prompt) }
            @for option in session.option_views() {
                (option_row(&option, answered))
            }
            (reveal_section(session, progress))
            @if answered && !progress.revealed() {
                (reveal_poll())
            }
            div."nav" {
                @if progress.position() > 0 {
                    button type="button" class="back-button"
                        hx-post=(names::PLAY_BACK_URL) hx-target=(names::QUIZ_TARGET) { "Back" }
                }
                @let class = if progress.revealed() { "next-button ready" } else { "next-button" };
                @if answered {
                    button type="button" class=(class)
                        hx-post=(names::PLAY_NEXT_URL) hx-target=(names::QUIZ_TARGET) { "Next" }
                } @else {
                    button type="button" class=(class) disabled { "Next" }
                }
            }
        }
    }
}

fn thank_you(session: &QuizSession) -> Markup {
    html! {
        div."card" {
            h2 { "Thank You for Playing! 🎉" }
            @if let Some(fact) = session.fun_fact() {
                p."fun-fact" { (fact) }
            }
            button type="button" class="next-button ready"
                hx-post=(names::PLAY_RESTART_URL) hx-target=(names::QUIZ_TARGET) { "Play Again" }
        }
    }
}

/// Renders the quiz area for the current session state.
pub fn session(session: &QuizSession) -> Markup {
    match session.phase() {
        Phase::Loading => html! { div."loading" { "Loading quiz..." } },
        Phase::InProgress(progress) => question_card(session, progress),
        Phase::Completed(_) => thank_you(session),
    }
}

/// Full page; the quiz area loads the visitor's play-through on arrival.
pub fn quiz_page(quiz: &QuizSession) -> Markup {
    super::page(
        names::QUIZ_TITLE,
        html! {
            div id=(names::QUIZ_ELEMENT_ID) hx-get=(names::PLAY_URL) hx-trigger="load" {
                (session(quiz))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn questions() -> Vec<Question> {
        (1..=3)
            .map(|n| Question {
                prompt: format!("Question {n}"),
                options: vec![format!("yes {n}"), format!("no {n}")],
                correct_answer: format!("yes {n}"),
                story_text: format!("Story {n}"),
                image_ref: format!("/img/{n}.png"),
                fun_fact: format!("Fact {n}"),
            })
            .collect()
    }

    #[test]
    fn loading_state_renders_placeholder() {
        let html = session(&QuizSession::new()).into_string();
        assert!(html.contains("Loading quiz..."));
    }

    #[test]
    fn unanswered_question_disables_next() {
        let quiz = QuizSession::new().loaded(questions());
        let html = session(&quiz).into_string();
        assert!(html.contains("Question 1"));
        assert!(html.contains(names::QUIZ_TITLE));
        assert!(html.contains("disabled"));
        assert!(!html.contains("Back"));
        assert!(!html.contains("answer-section"));
    }

    #[test]
    fn revealed_answer_shows_story_and_marks() {
        let (quiz, selection) = QuizSession::new().loaded(questions()).select_answer("no 1");
        let quiz = quiz.reveal(selection.unwrap().reveal);
        let html = session(&quiz).into_string();

        assert!(html.contains("Correct Answer: yes 1"));
        assert!(html.contains("Story 1"));
        assert!(html.contains("/img/1.png"));
        assert!(html.contains(names::WRONG_MARK));
        assert!(html.contains("option selected wrong"));
        assert!(html.contains("next-button ready"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn completed_session_thanks_with_fun_fact() {
        let mut quiz = QuizSession::new().loaded(questions());
        for n in 1..=3 {
            let (answered, _) = quiz.select_answer(&format!("yes {n}"));
            quiz = answered.advance();
        }
        let html = session(&quiz).into_string();
        assert!(html.contains("Thank You for Playing!"));
        assert!(html.contains("Fact 3"));
        assert!(html.contains(r#"hx-post="/play/restart""#));
        assert!(!html.contains(names::QUIZ_TITLE));
    }

    #[test]
    fn unanswered_options_post_their_answer() {
        let quiz = QuizSession::new().loaded(questions());
        let html = session(&quiz).into_string();
        assert!(html.contains(r#"hx-post="/play/answer""#));
        assert!(html.contains("&quot;option&quot;:&quot;yes 1&quot;"));
        assert!(!html.contains(r#"hx-get="/play""#));
    }

    #[test]
    fn pending_reveal_polls_and_locks_options() {
        let (quiz, _) = QuizSession::new().loaded(questions()).select_answer("yes 1");
        let html = session(&quiz).into_string();
        assert!(!html.contains(r#"hx-post="/play/answer""#));
        assert!(html.contains(r#"hx-trigger="load delay:300ms""#));
        assert!(html.contains(r#"hx-post="/play/next""#));
    }

    #[test]
    fn later_questions_offer_back() {
        let (quiz, _) = QuizSession::new().loaded(questions()).select_answer("yes 1");
        let html = session(&quiz.advance()).into_string();
        assert!(html.contains("Question 2"));
        assert!(html.contains(r#"hx-post="/play/back""#));
    }

    #[test]
    fn quiz_page_wraps_in_layout() {
        let html = quiz_page(&QuizSession::new()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("/static/quiz.css"));
        assert!(html.contains("/static/quiz.js"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains(r#"id="quiz""#));
        assert!(html.contains(r#"hx-get="/play""#));
    }
}
