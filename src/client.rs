//! HTTP client for a running quiz server.

use async_trait::async_trait;

use crate::{
    error::{DataLoadError, PersistenceError, QuizError},
    models::{Questions, QuizResponse},
    names,
    player::QuestionSource,
    results::{ResultReceipt, ResultRecord, ResultSink},
};

#[derive(Clone, Debug)]
pub struct HttpQuizClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(serde::Deserialize)]
struct SavedResponse {
    result: ResultReceipt,
}

impl HttpQuizClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl QuestionSource for HttpQuizClient {
    async fn fetch_questions(&self) -> Result<Questions, QuizError> {
        let response = self
            .http
            .get(self.url(names::QUIZ_URL))
            .send()
            .await
            .map_err(DataLoadError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataLoadError::Status(status).into());
        }

        let body: QuizResponse = response.json().await.map_err(DataLoadError::Decode)?;
        Ok(body.questions)
    }
}

#[async_trait]
impl ResultSink for HttpQuizClient {
    async fn submit(&self, record: &ResultRecord) -> Result<ResultReceipt, QuizError> {
        let response = self
            .http
            .post(self.url(names::RESULTS_URL))
            .json(record)
            .send()
            .await
            .map_err(PersistenceError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::Status(status).into());
        }

        let body: SavedResponse = response
            .json()
            .await
            .map_err(PersistenceError::Decode)?;
        Ok(body.result)
    }
}
