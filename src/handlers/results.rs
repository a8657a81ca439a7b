use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};

use crate::{
    names,
    rejections::{AppError, ResultExt},
    results::ResultRecord,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        names::RESULTS_URL,
        post(save_results).fallback(method_not_allowed),
    )
}

async fn save_results(
    State(state): State<AppState>,
    Json(record): Json<ResultRecord>,
) -> Result<Json<Value>, AppError> {
    let receipt = state
        .results
        .submit(&record)
        .await
        .reject("could not save quiz results")?;

    Ok(Json(json!({
        "message": names::RESULTS_SAVED,
        "result": receipt,
    })))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
