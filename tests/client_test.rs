mod common;

use std::sync::Arc;

use quickquiz::{
    client::HttpQuizClient,
    error::{DataLoadError, PersistenceError, QuizError},
    player::{LogFeedback, Player, QuestionSource},
    quiz_sets::QuizSetProvider,
    results::{ResultSink, SqliteResultSink},
    router, AppState,
};
use serde_json::json;

async fn spawn_server(provider: QuizSetProvider, db_url: String) -> String {
    let state = AppState::new(provider, Arc::new(SqliteResultSink::new(db_url)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let address = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("server");
    });
    format!("http://{address}")
}

async fn spawn_plain_text_server() -> String {
    use axum::routing::{get, post};

    let app = axum::Router::new()
        .route(quickquiz::names::QUIZ_URL, get(|| async { "not json" }))
        .route(quickquiz::names::RESULTS_URL, post(|| async { "not json" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let address = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    format!("http://{address}")
}

#[tokio::test]
async fn client_fetches_rotating_sets() {
    let file = common::quiz_file_with_sets(&["a", "b"], 2);
    let base = spawn_server(QuizSetProvider::new(file), common::create_test_db_url()).await;
    let client = HttpQuizClient::new(format!("{base}/"));

    let first = client.fetch_questions().await.unwrap();
    let second = client.fetch_questions().await.unwrap();

    assert_eq!(common::prompts(&first), ["a1", "a2"]);
    assert_eq!(common::prompts(&second), ["b1", "b2"]);
}

#[tokio::test]
async fn client_surfaces_server_failure() {
    let file = common::write_quiz_file("{}");
    let base = spawn_server(QuizSetProvider::new(file), common::create_test_db_url()).await;
    let client = HttpQuizClient::new(base);

    let err = client.fetch_questions().await.unwrap_err();
    assert!(matches!(err, QuizError::DataLoad(DataLoadError::Status(s)) if s.as_u16() == 500));
}

#[tokio::test]
async fn client_submits_results() {
    let db_url = common::create_test_db_url();
    let file = common::quiz_file_with_sets(&["a"], 1);
    let base = spawn_server(QuizSetProvider::new(file), db_url.clone()).await;
    let client = HttpQuizClient::new(base);

    let first = client.submit(&json!({"score": 1})).await.unwrap();
    let second = client.submit(&json!({"score": 2})).await.unwrap();
    assert_eq!(first.inserted_id, 1);
    assert_eq!(second.inserted_id, 2);

    let stored = SqliteResultSink::new(db_url).documents().await.unwrap();
    assert_eq!(stored, [json!({"score": 1}), json!({"score": 2})]);
}

#[tokio::test]
async fn client_reports_store_failure() {
    let file = common::quiz_file_with_sets(&["a"], 1);
    let base = spawn_server(QuizSetProvider::new(file), common::unreachable_db_url()).await;
    let client = HttpQuizClient::new(base);

    let err = client.submit(&json!({})).await.unwrap_err();
    assert!(matches!(err, QuizError::Persistence(_)));
}

#[tokio::test]
async fn player_plays_against_a_running_server() {
    let db_url = common::create_test_db_url();
    let file = common::quiz_file_with_sets(&["a"], 2);
    let base = spawn_server(QuizSetProvider::new(file), db_url.clone()).await;
    let client = Arc::new(HttpQuizClient::new(base));

    let mut player = Player::new(client.clone(), Arc::new(LogFeedback));
    player.mount().await;
    player.select_answer("yes");
    player.advance();
    player.select_answer("yes");
    player.advance();

    let receipt = player.submit_results(&*client).await.unwrap();
    assert!(receipt.is_some());

    let stored = SqliteResultSink::new(db_url).documents().await.unwrap();
    assert_eq!(stored[0]["correctAnswers"], 2);
}

#[tokio::test]
async fn undecodable_bodies_are_decode_errors() {
    let client = HttpQuizClient::new(spawn_plain_text_server().await);

    let err = client.fetch_questions().await.unwrap_err();
    assert!(matches!(err, QuizError::DataLoad(DataLoadError::Decode(_))));
    assert!(err.to_string().starts_with("could not decode quiz response"));

    let err = client.submit(&json!({})).await.unwrap_err();
    assert!(matches!(err, QuizError::Persistence(PersistenceError::Decode(_))));
}
