//! Creator dashboard actions, all scoped to the signed-in account

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::info;

use crate::common::{submit_form, ProfileId, SubmitError};
use crate::domains::creators::data::CreatorProfileInput;
use crate::domains::creators::models::{CreatorProfile, Earning};
use crate::domains::squads::models::Squad;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone)]
pub struct EarningsSummary {
    pub total_earnings: Decimal,
    pub earnings: Vec<Earning>,
}

/// Create or update the account's creator profile.
pub async fn upsert_creator_profile(
    profile_id: ProfileId,
    input: CreatorProfileInput,
    deps: &ServerDeps,
) -> Result<CreatorProfile, SubmitError> {
    let creator = submit_form(input, |valid| async move {
        CreatorProfile::upsert(profile_id, &valid, &deps.db_pool).await
    })
    .await?;

    info!(profile_id = %profile_id, creator_id = %creator.id, "Creator profile saved");
    Ok(creator)
}

/// Active squad memberships. Empty until a creator profile exists.
pub async fn my_squads(profile_id: ProfileId, deps: &ServerDeps) -> Result<Vec<Squad>> {
    match CreatorProfile::find_by_profile_id(profile_id, &deps.db_pool).await? {
        Some(creator) => Squad::list_for_creator(creator.id, &deps.db_pool).await,
        None => Ok(Vec::new()),
    }
}

/// Lifetime total and payout lines. Zero until a creator profile exists.
pub async fn my_earnings(profile_id: ProfileId, deps: &ServerDeps) -> Result<EarningsSummary> {
    let Some(creator) = CreatorProfile::find_by_profile_id(profile_id, &deps.db_pool).await? else {
        return Ok(EarningsSummary {
            total_earnings: Decimal::ZERO,
            earnings: Vec::new(),
        });
    };

    let earnings = Earning::list_for_creator(creator.id, &deps.db_pool).await?;

    Ok(EarningsSummary {
        total_earnings: creator.total_earnings,
        earnings,
    })
}
