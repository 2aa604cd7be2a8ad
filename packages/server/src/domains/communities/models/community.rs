use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::CommunityId;

/// Creator community - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub description: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
    pub join_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommunity {
    pub name: String,
    pub description: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
}

/// Public link for joining a community.
pub fn join_link(site_url: &str, id: CommunityId) -> String {
    format!("{}/community/{}", site_url.trim_end_matches('/'), id)
}

impl Community {
    /// Insert a community; the join link is derived from the generated id.
    pub async fn create(input: &CreateCommunity, site_url: &str, pool: &PgPool) -> Result<Self> {
        let id = CommunityId::new();

        sqlx::query_as::<_, Self>(
            "INSERT INTO communities (
                id, name, description, creator_name, creator_email, join_link
             )
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.creator_name)
        .bind(&input.creator_email)
        .bind(join_link(site_url, id))
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM communities ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
