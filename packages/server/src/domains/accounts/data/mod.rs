use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::domains::accounts::actions::SignUpResult;
use crate::domains::accounts::models::{Profile, UserType};

/// Account as exposed over GraphQL (credentials omitted)
#[derive(Debug, Clone, GraphQLObject)]
pub struct ProfileData {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileData {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into_uuid(),
            email: profile.email,
            full_name: profile.full_name,
            user_type: profile.user_type,
            is_admin: profile.is_admin,
            created_at: profile.created_at,
        }
    }
}

#[derive(Clone, GraphQLInputObject)]
pub struct SignUpInput {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct SignUpResultData {
    pub profile: ProfileData,
    /// Bearer token for the new session
    pub token: String,
}

impl From<SignUpResult> for SignUpResultData {
    fn from(result: SignUpResult) -> Self {
        Self {
            profile: result.profile.into(),
            token: result.token,
        }
    }
}
