use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CreatorProfileId, EarningId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "earning_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EarningStatus {
    Pending,
    Paid,
}

/// One campaign payout line (`creator_earnings` joined to its campaign title)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Earning {
    pub id: EarningId,
    pub campaign_title: String,
    pub amount: Decimal,
    pub status: EarningStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Earning {
    /// A creator's earnings, newest first
    pub async fn list_for_creator(creator_id: CreatorProfileId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT e.id, c.title AS campaign_title, e.amount, e.status, e.paid_at, e.created_at
             FROM creator_earnings e
             JOIN campaigns c ON c.id = e.campaign_id
             WHERE e.creator_id = $1
             ORDER BY e.created_at DESC",
        )
        .bind(creator_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
