//! Drives a [`QuizSession`] through one page lifetime: fetches questions,
//! fires answer feedback and schedules the deferred reveal.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::{
    error::QuizError,
    models::Questions,
    names,
    results::{ResultReceipt, ResultSink},
    session::{Feedback, QuizSession, RevealTicket},
};

/// Where a play-through gets its question list from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self) -> Result<Questions, QuizError>;
}

/// Receives the celebration or commiseration effect of an answer.
pub trait FeedbackSink: Send + Sync {
    fn feedback(&self, feedback: Feedback);
}

/// Feedback sink that only logs the requested burst.
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn feedback(&self, feedback: Feedback) {
        let burst = feedback.burst();
        tracing::debug!(
            "{feedback:?}: {} particles, spread {}",
            burst.particle_count,
            burst.spread
        );
    }
}

pub struct Player {
    session: Arc<Mutex<QuizSession>>,
    pending_reveal: Option<JoinHandle<()>>,
    source: Arc<dyn QuestionSource>,
    feedback: Arc<dyn FeedbackSink>,
    reveal_delay: Duration,
}

fn lock(session: &Mutex<QuizSession>) -> MutexGuard<'_, QuizSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Player {
    pub fn new(source: Arc<dyn QuestionSource>, feedback: Arc<dyn FeedbackSink>) -> Self {
        Self {
            session: Arc::new(Mutex::new(QuizSession::new())),
            pending_reveal: None,
            source,
            feedback,
            reveal_delay: names::REVEAL_DELAY,
        }
    }

    pub fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> QuizSession {
        lock(&self.session).clone()
    }

    fn replace(&self, transition: impl FnOnce(&QuizSession) -> QuizSession) {
        let mut session = lock(&self.session);
        *session = transition(&session);
    }

    fn cancel_reveal(&mut self) {
        if let Some(task) = self.pending_reveal.take() {
            task.abort();
        }
    }

    fn schedule_reveal(&mut self, ticket: RevealTicket) {
        self.cancel_reveal();
        let session = Arc::clone(&self.session);
        let delay = self.reveal_delay;
        self.pending_reveal = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = lock(&session);
            *session = session.reveal(ticket);
        }));
    }

    /// Fetches the question list if the session is still loading. A failed
    /// fetch leaves the session loading.
    pub async fn mount(&mut self) {
        let loading = lock(&self.session).is_loading();
        if !loading {
            return;
        }
        match self.source.fetch_questions().await {
            Ok(questions) => self.replace(|s| s.loaded(questions)),
            Err(e) => tracing::warn!("could not fetch quiz questions: {e}"),
        }
    }

    /// Applies an answer and schedules its reveal. Returns the feedback that
    /// fired, which is `None` for ignored selections and revisited questions.
    pub fn select_answer(&mut self, option: &str) -> Option<Feedback> {
        let selection = {
            let mut session = lock(&self.session);
            let (next, selection) = session.select_answer(option);
            *session = next;
            selection
        }?;

        if let Some(feedback) = selection.feedback {
            self.feedback.feedback(feedback);
        }
        self.schedule_reveal(selection.reveal);
        selection.feedback
    }

    pub fn advance(&mut self) {
        self.cancel_reveal();
        self.replace(QuizSession::advance);
    }

    pub fn retreat(&mut self) {
        self.cancel_reveal();
        self.replace(QuizSession::retreat);
    }

    /// Throws the play-through away and fetches the next quiz set.
    pub async fn restart(&mut self) {
        self.cancel_reveal();
        self.replace(QuizSession::restart);
        self.mount().await;
    }

    /// Sends the result record of a completed session. Nothing is sent
    /// before completion.
    pub async fn submit_results(
        &self,
        sink: &dyn ResultSink,
    ) -> Result<Option<ResultReceipt>, QuizError> {
        let Some(record) = self.session().result_record() else {
            return Ok(None);
        };
        sink.submit(&record).await.map(Some)
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.cancel_reveal();
    }
}
