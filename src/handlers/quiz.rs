use axum::{extract::State, routing::get, Json, Router};
use maud::Markup;

use crate::{
    models::QuizResponse,
    names,
    rejections::{AppError, ResultExt},
    session::QuizSession,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::INDEX_URL, get(index))
        .route(names::QUIZ_URL, get(next_quiz))
}

/// Page shell; the play-through starts in its loading state.
async fn index() -> Markup {
    quiz_views::quiz_page(&QuizSession::new())
}

async fn next_quiz(State(state): State<AppState>) -> Result<Json<QuizResponse>, AppError> {
    let questions = state
        .provider
        .next_quiz_set()
        .await
        .reject("could not serve quiz set")?;

    Ok(Json(QuizResponse { questions }))
}
