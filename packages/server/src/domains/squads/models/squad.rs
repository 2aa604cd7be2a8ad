use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{CreatorProfileId, SquadId};

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Squad {
    pub id: SquadId,
    pub name: String,
    pub description: Option<String>,
    pub niche: Option<String>,
    pub total_followers: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Squad {
    /// Active squads, largest audience first
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM squads WHERE is_active = true ORDER BY total_followers DESC, name",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Squads a creator is an active member of, most recently joined first
    pub async fn list_for_creator(creator_id: CreatorProfileId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT s.*
             FROM squad_members m
             JOIN squads s ON s.id = m.squad_id
             WHERE m.creator_id = $1 AND m.is_active = true
             ORDER BY m.joined_at DESC",
        )
        .bind(creator_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
