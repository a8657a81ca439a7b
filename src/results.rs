//! Storage for the result record submitted at the end of a play-through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{Connection, Row, SqliteConnection};

use crate::{
    error::{PersistenceError, QuizError},
    names,
};

/// Opaque document submitted by the client. No schema is enforced.
pub type ResultRecord = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultReceipt {
    pub inserted_id: i64,
}

#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn submit(&self, record: &ResultRecord) -> Result<ResultReceipt, QuizError>;
}

/// Writes result documents into an SQLite database, one connection per call.
#[derive(Clone, Debug)]
pub struct SqliteResultSink {
    url: String,
}

impl SqliteResultSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn connect(&self) -> Result<SqliteConnection, PersistenceError> {
        Ok(SqliteConnection::connect(&self.url).await?)
    }

    async fn ensure_collection(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            names::RESULTS_COLLECTION
        );
        sqlx::query(&sql).execute(&mut *conn).await?;
        Ok(())
    }

    async fn insert(conn: &mut SqliteConnection, document: &str) -> Result<i64, sqlx::Error> {
        Self::ensure_collection(conn).await?;
        let sql = format!(
            "INSERT INTO {} (document) VALUES (?1)",
            names::RESULTS_COLLECTION
        );
        let result = sqlx::query(&sql).bind(document).execute(&mut *conn).await?;
        Ok(result.last_insert_rowid())
    }

    async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
        Self::ensure_collection(conn).await?;
        let sql = format!(
            "SELECT document FROM {} ORDER BY id",
            names::RESULTS_COLLECTION
        );
        let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
        rows.iter().map(|row| row.try_get("document")).collect()
    }

    /// All stored documents, oldest first.
    pub async fn documents(&self) -> Result<Vec<ResultRecord>, QuizError> {
        let mut conn = self.connect().await?;
        let selected = Self::select_all(&mut conn).await;
        release(conn).await;

        selected
            .map_err(PersistenceError::from)?
            .iter()
            .map(|doc| {
                serde_json::from_str::<ResultRecord>(doc)
                    .map_err(|e| QuizError::from(PersistenceError::Encode(e)))
            })
            .collect()
    }
}

#[async_trait]
impl ResultSink for SqliteResultSink {
    async fn submit(&self, record: &ResultRecord) -> Result<ResultReceipt, QuizError> {
        let document = serde_json::to_string(record).map_err(PersistenceError::Encode)?;

        let mut conn = self.connect().await?;
        let inserted = Self::insert(&mut conn, &document).await;
        release(conn).await;

        let inserted_id = inserted.map_err(PersistenceError::from)?;
        tracing::info!("result document {inserted_id} stored");
        Ok(ResultReceipt { inserted_id })
    }
}

async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("could not close result store connection: {e}");
    }
}
