use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::connection::get_postgres_connection;
use crate::db::migrations::run_postgres_migrations;
use crate::db::models::{AccountRow, ApplicationRow, JobRow, NewApplication, NewJob};
use crate::db::store::{Store, StoreError};

/// PostgreSQL-backed store for networked deployments
pub struct PostgresStore {
    pool: Pool<Postgres>,
}

impl PostgresStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn connect(
        database_url: &str,
        ssl: bool,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = get_postgres_connection(database_url, ssl, max_connections).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn upsert_account(
        &self,
        email: &str,
        role: Option<&str>,
        otp: &str,
    ) -> Result<(), StoreError> {
        debug!("Upserting account: email={}", email);

        sqlx::query(
            r#"
            INSERT INTO accounts (email, role, otp)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE SET
                role = EXCLUDED.role,
                otp = EXCLUDED.otp,
                updated_at = NOW()
            "#,
        )
        .bind(email)
        .bind(role)
        .bind(otp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_account(&self, email: &str, otp: &str) -> Result<Option<AccountRow>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, role, otp, created_at, updated_at
            FROM accounts
            WHERE email = $1 AND otp = $2
            "#,
        )
        .bind(email)
        .bind(otp)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_jobs(&self) -> Result<Vec<JobRow>, StoreError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, category, description, created_at, updated_at
            FROM jobs
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Listed {} jobs", rows.len());
        Ok(rows)
    }

    async fn create_job(&self, job: &NewJob) -> Result<JobRow, StoreError> {
        debug!("Creating job: title={}", job.title);

        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs (title, category, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, category, description, created_at, updated_at
            "#,
        )
        .bind(&job.title)
        .bind(&job.category)
        .bind(&job.description)
        .fetch_one(&self.pool)
        .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    async fn create_application(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRow, StoreError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (job_id, applicant_email)
            VALUES ($1, $2)
            RETURNING id, job_id, applicant_email, created_at, updated_at
            "#,
        )
        .bind(application.job_id)
        .bind(&application.applicant_email)
        .fetch_one(&self.pool)
        .await?;

        debug!("Application created with id={} for job_id={}", row.id, row.job_id);
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        run_postgres_migrations(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
