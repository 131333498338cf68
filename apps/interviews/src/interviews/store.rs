//! Persistence seam for interview records.
//!
//! `AppState` holds an `Arc<dyn InterviewStore>`; production uses
//! `PgInterviewStore`, tests swap in an in-memory backend.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::interview::{InterviewRecord, InterviewRow};

#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// All records, most recently recorded first.
    async fn list_newest_first(&self) -> Result<Vec<InterviewRecord>, StoreError>;

    /// Whether a record with this contact name exists, ignoring case.
    async fn contact_exists(&self, contact_name: &str) -> Result<bool, StoreError>;

    async fn insert(&self, record: &InterviewRecord) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store over the `interview_data` table.
///
/// Every call checks a connection out of the pool and returns it when the
/// call ends, on success and on every error path.
#[derive(Clone)]
pub struct PgInterviewStore {
    pool: PgPool,
}

impl PgInterviewStore {
    pub fn new(pool: PgPool) -> Self {
        PgInterviewStore { pool }
    }
}

#[async_trait]
impl InterviewStore for PgInterviewStore {
    async fn list_newest_first(&self) -> Result<Vec<InterviewRecord>, StoreError> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Connection)?;
        debug!("Connection acquired for interview listing");

        // Rows decode by column name, so column order in the table is irrelevant.
        let rows = sqlx::query_as::<_, InterviewRow>(
            "SELECT * FROM interview_data ORDER BY recorded_at DESC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(StoreError::Query)?;

        Ok(rows.into_iter().map(InterviewRecord::from).collect())
    }

    async fn contact_exists(&self, contact_name: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Connection)?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interview_data WHERE LOWER(contact_name) = LOWER($1)",
        )
        .bind(contact_name)
        .fetch_one(&mut *conn)
        .await
        .map_err(StoreError::Query)?;

        Ok(count > 0)
    }

    async fn insert(&self, record: &InterviewRecord) -> Result<(), StoreError> {
        let row = InterviewRow::from(record);
        let mut conn = self.pool.acquire().await.map_err(StoreError::Connection)?;

        sqlx::query(
            r#"
            INSERT INTO interview_data
                (contact_name, job_title, department, interview_date,
                 longest_process_manual_process, longest_process_multiple_sources,
                 longest_process_waiting_for_reports, longest_process_data_validation,
                 info_challenge_outdated, info_challenge_hard_to_access,
                 info_challenge_scattered_data, info_challenge_missing_reports,
                 info_challenge_hard_to_generate_reports,
                 infrastructure_challenge_manual_dependency,
                 infrastructure_challenge_lack_of_standardization,
                 infrastructure_challenge_vulnerabilities,
                 infrastructure_challenge_poor_scalability,
                 decision_driver_resource_optimization, decision_driver_cost_reduction,
                 decision_driver_better_planning, decision_driver_inefficiency_identification,
                 comments, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20, $21, $22, $23)
            "#,
        )
        .bind(&row.contact_name)
        .bind(&row.job_title)
        .bind(&row.department)
        .bind(row.interview_date)
        .bind(row.longest_process_manual_process)
        .bind(row.longest_process_multiple_sources)
        .bind(row.longest_process_waiting_for_reports)
        .bind(row.longest_process_data_validation)
        .bind(row.info_challenge_outdated)
        .bind(row.info_challenge_hard_to_access)
        .bind(row.info_challenge_scattered_data)
        .bind(row.info_challenge_missing_reports)
        .bind(row.info_challenge_hard_to_generate_reports)
        .bind(row.infrastructure_challenge_manual_dependency)
        .bind(row.infrastructure_challenge_lack_of_standardization)
        .bind(row.infrastructure_challenge_vulnerabilities)
        .bind(row.infrastructure_challenge_poor_scalability)
        .bind(row.decision_driver_resource_optimization)
        .bind(row.decision_driver_cost_reduction)
        .bind(row.decision_driver_better_planning)
        .bind(row.decision_driver_inefficiency_identification)
        .bind(&row.comments)
        .bind(row.recorded_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return StoreError::UniqueViolation;
                }
            }
            StoreError::Insert(e)
        })?;

        Ok(())
    }
}
