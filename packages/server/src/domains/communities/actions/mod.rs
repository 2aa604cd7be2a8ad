//! Community actions

use tracing::{error, info};

use crate::common::{submit_form, SubmitError};
use crate::domains::communities::data::CreateCommunityInput;
use crate::domains::communities::models::Community;
use crate::domains::notifications::{dispatch, Notification};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone)]
pub struct CommunityOutcome {
    pub community: Community,
    pub notification_error: Option<String>,
}

/// Create a community and invite its creator.
///
/// The community is kept even when the invite email fails.
pub async fn create_community(
    input: CreateCommunityInput,
    deps: &ServerDeps,
) -> Result<CommunityOutcome, SubmitError> {
    let community = submit_form(input, |valid| async move {
        Community::create(&valid, &deps.site_url, &deps.db_pool).await
    })
    .await?;

    info!(community_id = %community.id, name = %community.name, "Community created");

    let notification = Notification::community_invite(
        &community.creator_email,
        &community.creator_name,
        &community.name,
        &community.join_link,
    );

    let notification_error = match dispatch(&notification, deps.mailer.as_ref()).await {
        Ok(()) => None,
        Err(e) => {
            error!(
                community_id = %community.id,
                error = %format!("{:#}", e),
                "Community created but invite email failed"
            );
            Some(format!("{:#}", e))
        }
    };

    Ok(CommunityOutcome {
        community,
        notification_error,
    })
}
