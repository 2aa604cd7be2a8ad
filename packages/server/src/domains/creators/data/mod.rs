use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::validation::{count, optional};
use crate::common::{FormInput, ValidationError};
use crate::domains::creators::actions::EarningsSummary;
use crate::domains::creators::models::{
    CreatorProfile, Earning, EarningStatus, UpsertCreatorProfile,
};

/// Dollar amount with two decimals, e.g. `"12.50"`.
fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A creator's public profile and audience")]
pub struct CreatorProfileData {
    pub id: Uuid,
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
    pub total_earnings: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CreatorProfile> for CreatorProfileData {
    fn from(profile: CreatorProfile) -> Self {
        Self {
            id: profile.id.into_uuid(),
            bio: profile.bio,
            niche: profile.niche,
            instagram_handle: profile.instagram_handle,
            instagram_followers: profile.instagram_followers,
            tiktok_handle: profile.tiktok_handle,
            tiktok_followers: profile.tiktok_followers,
            youtube_handle: profile.youtube_handle,
            youtube_subscribers: profile.youtube_subscribers,
            twitter_handle: profile.twitter_handle,
            twitter_followers: profile.twitter_followers,
            total_earnings: money(profile.total_earnings),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct CreatorProfileInput {
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

impl FormInput for CreatorProfileInput {
    type Valid = UpsertCreatorProfile;

    fn validate(&self) -> Result<UpsertCreatorProfile, ValidationError> {
        Ok(UpsertCreatorProfile {
            bio: optional(self.bio.as_deref()),
            niche: optional(self.niche.as_deref()),
            instagram_handle: optional(self.instagram_handle.as_deref()),
            instagram_followers: count("Instagram followers", self.instagram_followers)?,
            tiktok_handle: optional(self.tiktok_handle.as_deref()),
            tiktok_followers: count("TikTok followers", self.tiktok_followers)?,
            youtube_handle: optional(self.youtube_handle.as_deref()),
            youtube_subscribers: count("YouTube subscribers", self.youtube_subscribers)?,
            twitter_handle: optional(self.twitter_handle.as_deref()),
            twitter_followers: count("Twitter followers", self.twitter_followers)?,
        })
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct EarningData {
    pub id: Uuid,
    pub campaign_title: String,
    pub amount: String,
    pub status: EarningStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Earning> for EarningData {
    fn from(earning: Earning) -> Self {
        Self {
            id: earning.id.into_uuid(),
            campaign_title: earning.campaign_title,
            amount: money(earning.amount),
            status: earning.status,
            paid_at: earning.paid_at,
            created_at: earning.created_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "Lifetime total plus per-campaign payouts, newest first")]
pub struct EarningsData {
    pub total_earnings: String,
    pub earnings: Vec<EarningData>,
}

impl From<EarningsSummary> for EarningsData {
    fn from(summary: EarningsSummary) -> Self {
        Self {
            total_earnings: money(summary.total_earnings),
            earnings: summary.earnings.into_iter().map(EarningData::from).collect(),
        }
    }
}
