//! Account gate: only approved creators may create an account.

use anyhow::Result;
use sqlx::PgPool;

use crate::domains::submissions::models::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Approved,
    NotApproved,
}

/// Look for at least one approved submission under `email`.
///
/// `email` must already be normalized. A pending submission does not count.
pub async fn check_approval(email: &str, pool: &PgPool) -> Result<GateDecision> {
    let approved = Submission::find_approved_by_email(email, pool).await?;

    Ok(match approved {
        Some(_) => GateDecision::Approved,
        None => GateDecision::NotApproved,
    })
}
