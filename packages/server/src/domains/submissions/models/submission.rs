use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::SubmissionId;

/// Review state of a creator application. Only moves pending -> approved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
}

/// Creator application - SQL persistence layer (`student_submissions`)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub platform: String,
    pub profile_url: String,
    /// Free-form follower count as entered ("5000", "12k")
    pub followers: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

/// Validated fields for a new application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub platform: String,
    pub profile_url: String,
    pub followers: String,
}

impl Submission {
    pub fn is_approved(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }

    pub async fn find_by_id(id: SubmissionId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM student_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Newest first, optionally filtered by status
    pub async fn list(status: Option<SubmissionStatus>, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM student_submissions
             WHERE ($1::submission_status IS NULL OR status = $1)
             ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a new application with status = pending
    pub async fn create(input: &CreateSubmission, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO student_submissions (
                id, name, email, phone, platform, profile_url, followers, status
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
             RETURNING *",
        )
        .bind(SubmissionId::new())
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.platform)
        .bind(&input.profile_url)
        .bind(&input.followers)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Mark approved and stamp approved_at.
    ///
    /// Re-approving re-stamps approved_at; status stays approved.
    /// Returns `None` when no submission has this id.
    pub async fn approve(id: SubmissionId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE student_submissions
             SET status = 'approved', approved_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Account gate lookup: any approved application for this email
    pub async fn find_approved_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM student_submissions
             WHERE email = $1 AND status = 'approved'
             ORDER BY approved_at DESC
             LIMIT 1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
