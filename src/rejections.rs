use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{error::QuizError, names};

#[derive(Debug)]
pub enum AppError {
    NoQuizData,
    QuizData,
    Results(String),
    MethodNotAllowed,
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            AppError::NoQuizData => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": names::NO_QUIZ_SETS }),
            ),
            AppError::QuizData => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": names::QUIZ_LOAD_FAILED }),
            ),
            AppError::Results(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": names::RESULTS_FAILED, "error": error }),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "message": names::METHOD_NOT_ALLOWED }),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": names::INTERNAL_ERROR }),
            ),
        };

        (code, Json(body)).into_response()
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::NoData => AppError::NoQuizData,
            QuizError::DataLoad(_) => AppError::QuizData,
            QuizError::Persistence(e) => AppError::Results(e.to_string()),
        }
    }
}

pub trait ResultExt<T> {
    /// Logs the error with `context` and turns it into an [`AppError`].
    fn reject(self, context: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, QuizError> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::from(e)
        })
    }
}
