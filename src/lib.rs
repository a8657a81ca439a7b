pub mod client;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod player;
pub mod plays;
pub mod quiz_sets;
pub mod rejections;
pub mod results;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::Router;

use crate::{plays::PlayRegistry, quiz_sets::QuizSetProvider, results::ResultSink};

#[derive(Clone)]
pub struct AppState {
    pub provider: QuizSetProvider,
    pub results: Arc<dyn ResultSink>,
    pub plays: PlayRegistry,
    /// Marks the play cookie `Secure`; off for plain-HTTP local serving.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(provider: QuizSetProvider, results: Arc<dyn ResultSink>) -> Self {
        Self {
            provider,
            results,
            plays: PlayRegistry::default(),
            secure_cookies: false,
        }
    }

    pub fn with_secure_cookies(mut self, secure_cookies: bool) -> Self {
        self.secure_cookies = secure_cookies;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::quiz::routes())
        .merge(handlers::results::routes())
        .merge(handlers::play::routes())
        .nest(names::STATIC_URL, statics::routes())
        .with_state(state)
}
