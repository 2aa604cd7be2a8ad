use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::common::{CreatorProfileId, ProfileId};

/// A creator's public profile, one per account (`creator_profiles`)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CreatorProfile {
    pub id: CreatorProfileId,
    pub profile_id: ProfileId,
    pub bio: Option<String>,
    pub niche: Option<String>,
    pub instagram_handle: Option<String>,
    pub instagram_followers: Option<i32>,
    pub tiktok_handle: Option<String>,
    pub tiktok_followers: Option<i32>,
    pub youtube_handle: Option<String>,
    pub youtube_subscribers: Option<i32>,
    pub twitter_handle: Option<String>,
    pub twitter_followers: Option<i32>,
    /// Running total maintained by payouts; never written by the upsert
    pub total_earnings: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated profile fields. Blank fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertCreatorProfile {
    pub bio: Option<String>,
    pub niche: Option<String>,
    pub instagram_handle: Option<String>,
    pub instagram_followers: Option<i32>,
    pub tiktok_handle: Option<String>,
    pub tiktok_followers: Option<i32>,
    pub youtube_handle: Option<String>,
    pub youtube_subscribers: Option<i32>,
    pub twitter_handle: Option<String>,
    pub twitter_followers: Option<i32>,
}

impl CreatorProfile {
    pub async fn find_by_profile_id(profile_id: ProfileId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM creator_profiles WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Create the account's creator profile, or replace its fields when one exists.
    pub async fn upsert(
        profile_id: ProfileId,
        input: &UpsertCreatorProfile,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO creator_profiles (
                id, profile_id, bio, niche,
                instagram_handle, instagram_followers,
                tiktok_handle, tiktok_followers,
                youtube_handle, youtube_subscribers,
                twitter_handle, twitter_followers
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             ON CONFLICT (profile_id) DO UPDATE SET
                bio = EXCLUDED.bio,
                niche = EXCLUDED.niche,
                instagram_handle = EXCLUDED.instagram_handle,
                instagram_followers = EXCLUDED.instagram_followers,
                tiktok_handle = EXCLUDED.tiktok_handle,
                tiktok_followers = EXCLUDED.tiktok_followers,
                youtube_handle = EXCLUDED.youtube_handle,
                youtube_subscribers = EXCLUDED.youtube_subscribers,
                twitter_handle = EXCLUDED.twitter_handle,
                twitter_followers = EXCLUDED.twitter_followers,
                updated_at = NOW()
             RETURNING *",
        )
        .bind(CreatorProfileId::new())
        .bind(profile_id)
        .bind(&input.bio)
        .bind(&input.niche)
        .bind(&input.instagram_handle)
        .bind(input.instagram_followers)
        .bind(&input.tiktok_handle)
        .bind(input.tiktok_followers)
        .bind(&input.youtube_handle)
        .bind(input.youtube_subscribers)
        .bind(&input.twitter_handle)
        .bind(input.twitter_followers)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
