//! Assessment persistence
//!
//! Append-only store for completed scan assessments, backed by SQLite via
//! sqlx. The orchestrator depends only on the `AssessmentStore` trait; each
//! assessment is written once, fully populated, and never mutated.

use crate::models::ScanAssessment;
use crate::utils::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;

/// A persisted scan row, as read back from the database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct StoredAssessment {
    pub id: i64,
    pub url: String,
    pub domain: String,
    pub risk_level: i64,
    pub risk_category: String,
    pub ssl_grade: String,
    pub domain_age: i64,
    pub ssl_valid: bool,
    pub security_score: i64,
    pub trust_score: i64,
    pub created_at: DateTime<Utc>,
}

/// Append-only persistence collaborator for scan assessments
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Persist a completed assessment, returning the record id
    async fn save(&self, assessment: &ScanAssessment) -> Result<i64, StoreError>;

    /// Fetch a previously stored assessment by id
    async fn fetch(&self, id: i64) -> Result<Option<StoredAssessment>, StoreError>;
}

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS scan_assessments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL,
    domain TEXT NOT NULL,
    risk_level INTEGER NOT NULL,
    risk_category TEXT NOT NULL,
    ssl_grade TEXT NOT NULL,
    domain_age INTEGER NOT NULL,
    ssl_valid BOOLEAN NOT NULL DEFAULT FALSE,
    security_score INTEGER NOT NULL,
    trust_score INTEGER NOT NULL,
    created_at TEXT NOT NULL
)";

/// SQLite-backed assessment store
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `url` and ensure the schema exists
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Open {
                message: e.to_string(),
            })?
            .create_if_missing(true);

        // In-memory SQLite databases exist per connection; a single
        // connection keeps every query on the same schema.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Open {
                message: e.to_string(),
            })?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::Open {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl AssessmentStore for SqliteStore {
    async fn save(&self, assessment: &ScanAssessment) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO scan_assessments
                (url, domain, risk_level, risk_category, ssl_grade, domain_age,
                 ssl_valid, security_score, trust_score, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&assessment.input_url)
        .bind(&assessment.domain)
        .bind(assessment.risk_score as i64)
        .bind(assessment.risk_category.as_str())
        .bind(assessment.certificate.grade.as_str())
        .bind(assessment.domain_age.age_years as i64)
        .bind(assessment.certificate.is_valid)
        .bind(assessment.security_score as i64)
        .bind(assessment.trust_score as i64)
        .bind(assessment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Save {
            message: e.to_string(),
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn fetch(&self, id: i64) -> Result<Option<StoredAssessment>, StoreError> {
        sqlx::query_as::<_, StoredAssessment>(
            "SELECT id, url, domain, risk_level, risk_category, ssl_grade, domain_age,
                    ssl_valid, security_score, trust_score, created_at
             FROM scan_assessments
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Load {
            id,
            message: e.to_string(),
        })
    }
}
