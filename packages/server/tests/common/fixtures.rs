//! Test fixtures for creating test data.
//!
//! The database is shared across tests, so every fixture email is unique.

use anyhow::Result;
use server_core::common::{CampaignId, CreatorProfileId, SquadId};
use server_core::domains::accounts::password::hash_password;
use server_core::domains::accounts::{CreateProfile, Profile, UserType};
use server_core::domains::submissions::models::{CreateSubmission, Submission};
use sqlx::PgPool;
use uuid::Uuid;

/// `signUp` mutation selecting the token and the new profile.
pub fn sign_up_mutation(email: &str, password: &str, confirm: &str) -> String {
    format!(
        r#"mutation {{
            signUp(input: {{
                email: "{email}",
                fullName: "Test Creator",
                password: "{password}",
                confirmPassword: "{confirm}"
            }}) {{
                token
                profile {{ email userType isAdmin }}
            }}
        }}"#
    )
}

/// A unique, already-normalized address under `x.edu`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@x.edu", prefix, Uuid::new_v4().simple())
}

pub async fn create_pending_submission(pool: &PgPool, name: &str, email: &str) -> Result<Submission> {
    Submission::create(
        &CreateSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            platform: "Instagram".to_string(),
            profile_url: "@creator".to_string(),
            followers: "5000".to_string(),
        },
        pool,
    )
    .await
}

pub async fn create_approved_submission(pool: &PgPool, name: &str, email: &str) -> Result<Submission> {
    let submission = create_pending_submission(pool, name, email).await?;
    let approved = Submission::approve(submission.id, pool)
        .await?
        .expect("Submission should exist");
    Ok(approved)
}

/// A creator account inserted directly, bypassing the approval gate.
pub async fn create_creator_account(pool: &PgPool, email: &str) -> Result<Profile> {
    Profile::create(&creator_account(email), pool).await
}

pub fn creator_account(email: &str) -> CreateProfile {
    CreateProfile {
        email: email.to_string(),
        full_name: "Test Creator".to_string(),
        user_type: UserType::Creator,
        password: hash_password("secret1"),
    }
}

pub async fn create_squad(pool: &PgPool, name: &str, total_followers: i32) -> Result<SquadId> {
    let id = SquadId::new();
    sqlx::query(
        "INSERT INTO squads (id, name, niche, total_followers) VALUES ($1, $2, 'food', $3)",
    )
    .bind(id)
    .bind(name)
    .bind(total_followers)
    .execute(pool)
    .await?;
    Ok(id)
}

pub async fn add_squad_member(
    pool: &PgPool,
    squad_id: SquadId,
    creator_id: CreatorProfileId,
    is_active: bool,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO squad_members (id, squad_id, creator_id, is_active)
         VALUES (gen_random_uuid(), $1, $2, $3)",
    )
    .bind(squad_id)
    .bind(creator_id)
    .bind(is_active)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn create_campaign(pool: &PgPool, title: &str) -> Result<CampaignId> {
    let id = CampaignId::new();
    sqlx::query("INSERT INTO campaigns (id, title, description) VALUES ($1, $2, 'Test campaign')")
        .bind(id)
        .bind(title)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Record a payout line `days_ago` days in the past. `amount` is a SQL numeric literal.
pub async fn add_earning(
    pool: &PgPool,
    creator_id: CreatorProfileId,
    campaign_id: CampaignId,
    squad_id: SquadId,
    amount: &str,
    status: &str,
    days_ago: i32,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO creator_earnings (id, creator_id, campaign_id, squad_id, amount, status, created_at)
         VALUES (gen_random_uuid(), $1, $2, $3, $4::numeric, $5::earning_status,
                 NOW() - make_interval(days => $6))",
    )
    .bind(creator_id)
    .bind(campaign_id)
    .bind(squad_id)
    .bind(amount)
    .bind(status)
    .bind(days_ago)
    .execute(pool)
    .await?;
    Ok(())
}
