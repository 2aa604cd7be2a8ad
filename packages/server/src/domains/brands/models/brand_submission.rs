use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::BrandSubmissionId;

/// Brand collaboration request - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct BrandSubmission {
    pub id: BrandSubmissionId,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub campaign_details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBrandSubmission {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub campaign_details: String,
}

impl BrandSubmission {
    pub async fn create(input: &CreateBrandSubmission, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO brand_submissions (
                id, company_name, contact_name, email, phone, campaign_details
             )
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(BrandSubmissionId::new())
        .bind(&input.company_name)
        .bind(&input.contact_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.campaign_details)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// All requests, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM brand_submissions ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
