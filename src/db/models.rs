use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of an account, keyed by email
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountRow {
    pub id: i64,
    pub email: String,
    pub role: Option<String>,
    pub otp: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database representation of a job with all fields
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationRow {
    pub id: i64,
    pub job_id: i64,
    pub applicant_email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Values needed to insert a job
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i64,
    pub applicant_email: String,
}
