//! Interactive play-through for browser visitors. Each route drives the
//! visitor's server-held [`Player`] and answers with the quiz fragment htmx
//! swaps into the page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::{
    extractors::PlayCookie,
    names,
    player::{LogFeedback, Player},
    plays::SharedPlayer,
    rejections::AppError,
    session::{Feedback, QuizSession},
    utils,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::PLAY_URL, get(show))
        .route(names::PLAY_ANSWER_URL, post(answer))
        .route(names::PLAY_NEXT_URL, post(next))
        .route(names::PLAY_BACK_URL, post(back))
        .route(names::PLAY_RESTART_URL, post(restart))
}

#[derive(Deserialize)]
struct AnswerForm {
    option: String,
}

struct Visit {
    token: String,
    player: SharedPlayer,
    is_new: bool,
}

fn visit(state: &AppState, token: Option<String>) -> Visit {
    let known = token.and_then(|token| state.plays.get(&token).map(|player| (token, player)));
    if let Some((token, player)) = known {
        return Visit {
            token,
            player,
            is_new: false,
        };
    }

    let player = Player::new(Arc::new(state.provider.clone()), Arc::new(LogFeedback));
    let (token, player) = state.plays.insert(player);
    tracing::info!("started play-through {token}");
    Visit {
        token,
        player,
        is_new: true,
    }
}

fn confetti_options(feedback: Feedback) -> Value {
    let burst = feedback.burst();
    json!({
        "particleCount": burst.particle_count,
        "spread": burst.spread,
        "origin": { "y": burst.origin_y },
        "colors": burst.colors,
    })
}

fn fragment(
    state: &AppState,
    visit: &Visit,
    session: &QuizSession,
    feedback: Option<Feedback>,
) -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();

    if visit.is_new {
        let cookie = utils::cookie(names::PLAY_COOKIE_NAME, &visit.token, state.secure_cookies);
        let cookie = HeaderValue::from_str(&cookie).map_err(|_| AppError::Internal)?;
        headers.insert(SET_COOKIE, cookie);
    }

    if let Some(feedback) = feedback {
        let mut trigger = Map::new();
        trigger.insert(names::FEEDBACK_EVENT.to_string(), confetti_options(feedback));
        let trigger = HeaderValue::from_str(&Value::Object(trigger).to_string())
            .map_err(|_| AppError::Internal)?;
        headers.insert("HX-Trigger", trigger);
    }

    Ok((headers, quiz_views::session(session)).into_response())
}

async fn show(
    State(state): State<AppState>,
    PlayCookie(token): PlayCookie,
) -> Result<Response, AppError> {
    let visit = visit(&state, token);
    let mut player = visit.player.lock().await;
    player.mount().await;
    fragment(&state, &visit, &player.session(), None)
}

async fn answer(
    State(state): State<AppState>,
    PlayCookie(token): PlayCookie,
    Form(form): Form<AnswerForm>,
) -> Result<Response, AppError> {
    let visit = visit(&state, token);
    let mut player = visit.player.lock().await;
    player.mount().await;
    let feedback = player.select_answer(&form.option);
    fragment(&state, &visit, &player.session(), feedback)
}

/// Moves to the next question. The result record is stored once, on the
/// transition into the thank-you screen.
async fn next(
    State(state): State<AppState>,
    PlayCookie(token): PlayCookie,
) -> Result<Response, AppError> {
    let visit = visit(&state, token);
    let mut player = visit.player.lock().await;
    player.mount().await;

    let was_completed = player.session().is_completed();
    player.advance();
    if !was_completed && player.session().is_completed() {
        if let Err(e) = player.submit_results(state.results.as_ref()).await {
            tracing::error!("could not store result of {}: {e}", visit.token);
        }
    }

    fragment(&state, &visit, &player.session(), None)
}

async fn back(
    State(state): State<AppState>,
    PlayCookie(token): PlayCookie,
) -> Result<Response, AppError> {
    let visit = visit(&state, token);
    let mut player = visit.player.lock().await;
    player.mount().await;
    player.retreat();
    fragment(&state, &visit, &player.session(), None)
}

async fn restart(
    State(state): State<AppState>,
    PlayCookie(token): PlayCookie,
) -> Result<Response, AppError> {
    let visit = visit(&state, token);
    let mut player = visit.player.lock().await;
    player.restart().await;
    fragment(&state, &visit, &player.session(), None)
}
