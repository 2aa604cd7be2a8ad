use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use uuid::Uuid;

use crate::domains::squads::models::Squad;

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A group of creators sharing a niche")]
pub struct SquadData {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub niche: Option<String>,
    pub total_followers: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Squad> for SquadData {
    fn from(squad: Squad) -> Self {
        Self {
            id: squad.id.into_uuid(),
            name: squad.name,
            description: squad.description,
            niche: squad.niche,
            total_followers: squad.total_followers,
            created_at: squad.created_at,
        }
    }
}
