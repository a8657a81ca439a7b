//! Quiz set rotation.
//!
//! Every request reads the quiz file again and hands out the next set in
//! round-robin order. The rotation cursor is owned by whoever serves the
//! sets and is shared between concurrent requests; under concurrent load two
//! requests may be served in either order, but every slot maps to a valid set.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;

use crate::{
    error::{DataLoadError, QuizError},
    models::{Question, Questions, QuizSets},
    player::QuestionSource,
};

/// Counter deciding which quiz set is served next. Starts at zero and is
/// never persisted.
#[derive(Clone, Debug, Default)]
pub struct RotationCursor(Arc<AtomicUsize>);

impl RotationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(slot: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(slot)))
    }

    /// Returns the slot to serve and moves the cursor forward by one.
    pub fn advance(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    pub fn current(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// Picks the set for `slot`, wrapping around the available sets.
pub fn select_quiz_set(sets: &QuizSets, slot: usize) -> Option<(&str, &[Question])> {
    if sets.is_empty() {
        return None;
    }
    sets.get_index(slot % sets.len())
        .map(|(name, questions)| (name.as_str(), questions.as_slice()))
}

/// Reads and validates the quiz file.
pub async fn load_quiz_sets(path: &Path) -> Result<QuizSets, QuizError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataLoadError::Read {
            path: path.to_owned(),
            source,
        })?;
    let sets: QuizSets = serde_json::from_str(&raw).map_err(DataLoadError::Malformed)?;

    for (name, questions) in &sets {
        for (index, question) in questions.iter().enumerate() {
            question
                .validate()
                .map_err(|reason| DataLoadError::InvalidQuestion {
                    set: name.clone(),
                    index,
                    reason,
                })?;
        }
    }

    Ok(sets)
}

#[derive(Clone, Debug)]
pub struct QuizSetProvider {
    source: PathBuf,
    cursor: RotationCursor,
}

impl QuizSetProvider {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self::with_cursor(source, RotationCursor::new())
    }

    pub fn with_cursor(source: impl Into<PathBuf>, cursor: RotationCursor) -> Self {
        Self {
            source: source.into(),
            cursor,
        }
    }

    pub fn cursor(&self) -> &RotationCursor {
        &self.cursor
    }

    /// Serves the next quiz set. The cursor only moves when a set is served.
    pub async fn next_quiz_set(&self) -> Result<Questions, QuizError> {
        let sets = load_quiz_sets(&self.source).await?;
        if sets.is_empty() {
            return Err(QuizError::NoData);
        }

        let slot = self.cursor.advance();
        let (name, questions) = select_quiz_set(&sets, slot).ok_or(QuizError::NoData)?;
        tracing::debug!("serving quiz set '{name}' (slot {slot}, {} questions)", questions.len());

        Ok(questions.to_vec())
    }
}

#[async_trait]
impl QuestionSource for QuizSetProvider {
    async fn fetch_questions(&self) -> Result<Questions, QuizError> {
        self.next_quiz_set().await
    }
}
