use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::validation::{normalize_email, optional, required};
use crate::common::{FormInput, ValidationError};
use crate::domains::communities::actions::CommunityOutcome;
use crate::domains::communities::models::{Community, CreateCommunity};

#[derive(Debug, Clone, GraphQLObject)]
pub struct CommunityData {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
    pub join_link: String,
    pub created_at: DateTime<Utc>,
}

impl From<Community> for CommunityData {
    fn from(community: Community) -> Self {
        Self {
            id: community.id.into_uuid(),
            name: community.name,
            description: community.description,
            creator_name: community.creator_name,
            creator_email: community.creator_email,
            join_link: community.join_link,
            created_at: community.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct CreateCommunityInput {
    pub name: String,
    pub description: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
}

impl FormInput for CreateCommunityInput {
    type Valid = CreateCommunity;

    fn validate(&self) -> Result<CreateCommunity, ValidationError> {
        Ok(CreateCommunity {
            name: required("community name", &self.name)?,
            description: optional(self.description.as_deref()),
            creator_name: required("creator name", &self.creator_name)?,
            creator_email: normalize_email(&self.creator_email)?,
        })
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct CommunityResultData {
    pub community: CommunityData,
    /// Whether the invite email went out
    pub notified: bool,
    /// Set when the community was created but the invite failed
    pub notification_error: Option<String>,
}

impl From<CommunityOutcome> for CommunityResultData {
    fn from(outcome: CommunityOutcome) -> Self {
        Self {
            notified: outcome.notification_error.is_none(),
            notification_error: outcome.notification_error,
            community: outcome.community.into(),
        }
    }
}
