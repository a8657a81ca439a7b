//! One play-through of a quiz set.
//!
//! `QuizSession` is a value: every transition returns a new session and the
//! previous one is left untouched. The driver that owns it (see
//! [`crate::player`]) replaces its copy wholesale after each event.

use std::sync::Arc;

use serde_json::json;

use crate::{models::Question, names, results::ResultRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizSession {
    play: u64,
    phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Loading,
    InProgress(Progress),
    Completed(Progress),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    questions: Arc<[Question]>,
    position: usize,
    selected: Option<String>,
    revealed: bool,
    answers: Vec<Option<String>>,
}

impl Progress {
    fn start(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions: questions.into(),
            position: 0,
            selected: None,
            revealed: false,
            answers,
        }
    }

    fn at(&self, position: usize) -> Self {
        Self {
            position,
            selected: None,
            revealed: false,
            ..self.clone()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.position]
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.questions.len()
    }
}

/// Identifies the deferred reveal scheduled by one answer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    play: u64,
    position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Celebrate,
    Commiserate,
}

/// Confetti burst parameters for a feedback effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    pub spread: u32,
    pub origin_y: f32,
    pub colors: &'static [&'static str],
}

impl Feedback {
    pub fn burst(self) -> Burst {
        match self {
            Feedback::Celebrate => Burst {
                particle_count: 100,
                spread: 70,
                origin_y: 0.6,
                colors: &["#ffb6c1", "#8f83d8", "#d69cbc", "#51074a", "#191970"],
            },
            Feedback::Commiserate => Burst {
                particle_count: 30,
                spread: 70,
                origin_y: 0.6,
                colors: &["#ff0000", "#ff6961"],
            },
        }
    }
}

/// Side effects requested by an accepted answer. `feedback` is only set the
/// first time a question is answered in a play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub feedback: Option<Feedback>,
    pub reveal: RevealTicket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Letter(char),
    Correct,
    Wrong,
}

impl OptionMark {
    pub fn label(self) -> String {
        match self {
            OptionMark::Letter(c) => c.to_string(),
            OptionMark::Correct => names::CORRECT_MARK.to_string(),
            OptionMark::Wrong => names::WRONG_MARK.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub text: &'a str,
    pub mark: OptionMark,
    pub selected: bool,
    pub correct: bool,
    /// Wrong options shake once any answer has been chosen.
    pub shaking: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&self) -> u64 {
        self.play
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed(_))
    }

    pub fn progress(&self) -> Option<&Progress> {
        match &self.phase {
            Phase::Loading => None,
            Phase::InProgress(p) | Phase::Completed(p) => Some(p),
        }
    }

    fn in_progress(&self) -> Option<&Progress> {
        match &self.phase {
            Phase::InProgress(p) => Some(p),
            _ => None,
        }
    }

    fn with_phase(&self, phase: Phase) -> Self {
        Self {
            play: self.play,
            phase,
        }
    }

    /// Starts the play-through once questions arrive. An empty list keeps the
    /// session loading.
    pub fn loaded(&self, questions: Vec<Question>) -> Self {
        if !self.is_loading() || questions.is_empty() {
            return self.clone();
        }
        self.with_phase(Phase::InProgress(Progress::start(questions)))
    }

    /// Chooses an answer for the current question. Later calls and unknown
    /// options change nothing. A question revisited with `retreat` can be
    /// answered again, but keeps its first answer and fires no feedback.
    pub fn select_answer(&self, option: &str) -> (Self, Option<Selection>) {
        let Some(progress) = self.in_progress() else {
            return (self.clone(), None);
        };
        let question = progress.current();
        if progress.selected.is_some() || !question.has_option(option) {
            return (self.clone(), None);
        }

        let first_answer = progress.answers[progress.position].is_none();
        let feedback = first_answer.then(|| {
            if question.is_correct(option) {
                Feedback::Celebrate
            } else {
                Feedback::Commiserate
            }
        });
        let mut next = progress.clone();
        next.selected = Some(option.to_string());
        if first_answer {
            next.answers[progress.position] = Some(option.to_string());
        }

        let selection = Selection {
            feedback,
            reveal: RevealTicket {
                play: self.play,
                position: progress.position,
            },
        };
        (self.with_phase(Phase::InProgress(next)), Some(selection))
    }

    /// Applies a deferred reveal. Tickets from an earlier play or another
    /// question are ignored, as is a second reveal of the same question.
    pub fn reveal(&self, ticket: RevealTicket) -> Self {
        match self.in_progress() {
            Some(p)
                if ticket.play == self.play
                    && ticket.position == p.position
                    && p.selected.is_some()
                    && !p.revealed =>
            {
                let mut next = p.clone();
                next.revealed = true;
                self.with_phase(Phase::InProgress(next))
            }
            _ => self.clone(),
        }
    }

    pub fn advance(&self) -> Self {
        match self.in_progress() {
            Some(p) if p.selected.is_some() => {
                if p.is_last() {
                    self.with_phase(Phase::Completed(p.clone()))
                } else {
                    self.with_phase(Phase::InProgress(p.at(p.position + 1)))
                }
            }
            _ => self.clone(),
        }
    }

    pub fn retreat(&self) -> Self {
        match self.in_progress() {
            Some(p) if p.position > 0 => self.with_phase(Phase::InProgress(p.at(p.position - 1))),
            _ => self.clone(),
        }
    }

    /// Discards the play-through. The caller fetches a fresh question list.
    pub fn restart(&self) -> Self {
        Self {
            play: self.play + 1,
            phase: Phase::Loading,
        }
    }

    /// Text shown once the answer is revealed.
    pub fn reveal_text(&self) -> Option<String> {
        let progress = self.progress().filter(|p| p.revealed)?;
        let question = progress.current();
        let selected = progress.selected()?;

        let mut text = if question.is_correct(selected) {
            "Correct Answer".to_string()
        } else {
            format!("Correct Answer: {}", question.correct_answer)
        };
        if progress.position % names::REMARK_EVERY == names::REMARK_EVERY - 1 {
            text.push_str(names::SUPPLEMENTARY_REMARK);
        }
        Some(text)
    }

    pub fn option_views(&self) -> Vec<OptionView<'_>> {
        let Some(progress) = self.progress() else {
            return Vec::new();
        };
        let question = progress.current();
        let answered = progress.selected.is_some();

        question
            .options
            .iter()
            .zip('A'..='Z')
            .map(|(option, letter)| {
                let correct = question.is_correct(option);
                let selected = progress.selected() == Some(option.as_str());
                let mark = match (selected, correct) {
                    (true, true) => OptionMark::Correct,
                    (true, false) => OptionMark::Wrong,
                    (false, _) => OptionMark::Letter(letter),
                };
                OptionView {
                    text: option,
                    mark,
                    selected,
                    correct,
                    shaking: answered && !correct,
                }
            })
            .collect()
    }

    /// The closing fun fact, available once the session is completed.
    pub fn fun_fact(&self) -> Option<&str> {
        match &self.phase {
            Phase::Completed(p) => Some(p.current().fun_fact.as_str()),
            _ => None,
        }
    }

    /// Summary document for the result store, available once completed.
    pub fn result_record(&self) -> Option<ResultRecord> {
        let Phase::Completed(progress) = &self.phase else {
            return None;
        };

        let answers: Vec<_> = progress
            .questions
            .iter()
            .zip(&progress.answers)
            .map(|(question, answer)| {
                json!({
                    "question": question.prompt,
                    "selected": answer,
                    "correct": answer.as_deref().is_some_and(|a| question.is_correct(a)),
                })
            })
            .collect();
        let correct = answers
            .iter()
            .filter(|a| a["correct"].as_bool().unwrap_or(false))
            .count();

        Some(json!({
            "totalQuestions": progress.questions.len(),
            "correctAnswers": correct,
            "answers": answers,
        }))
    }
}
