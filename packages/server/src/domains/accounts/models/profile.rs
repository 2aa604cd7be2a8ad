use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ProfileId;
use crate::domains::accounts::password::PasswordHash;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "user_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Creator,
    Brand,
}

/// Account row - SQL persistence layer (`profiles`)
#[derive(sqlx::FromRow, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    pub is_admin: bool,
    pub password_hash: String,
    pub password_salt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Keep credentials out of logs.
impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("user_type", &self.user_type)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}

pub struct CreateProfile {
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    pub password: PasswordHash,
}

impl Profile {
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new account. Fails on a duplicate email (unique constraint).
    pub async fn create(input: &CreateProfile, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO profiles (
                id, email, full_name, user_type, password_hash, password_salt
             )
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(ProfileId::new())
        .bind(&input.email)
        .bind(&input.full_name)
        .bind(input.user_type)
        .bind(&input.password.hash)
        .bind(&input.password.salt)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// True when `err` wraps a Postgres unique-constraint violation.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
