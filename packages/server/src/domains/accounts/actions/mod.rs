//! Account actions

use anyhow::Context;
use tracing::{info, warn};

use crate::common::validation::{normalize_email, required};
use crate::domains::accounts::data::SignUpInput;
use crate::domains::accounts::errors::SignUpError;
use crate::domains::accounts::gate::{check_approval, GateDecision};
use crate::domains::accounts::models::{is_unique_violation, CreateProfile, Profile, UserType};
use crate::domains::accounts::password::{hash_password, MIN_PASSWORD_LENGTH};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub profile: Profile,
    pub token: String,
}

/// Create a creator account.
///
/// Checks run in order: the approval gate, password confirmation, password
/// length. Nothing is written unless all of them pass.
pub async fn sign_up(input: SignUpInput, deps: &ServerDeps) -> Result<SignUpResult, SignUpError> {
    let email = normalize_email(&input.email)?;
    let full_name = required("full name", &input.full_name)?;

    if check_approval(&email, &deps.db_pool).await? == GateDecision::NotApproved {
        warn!(email = %email, "Sign-up rejected: no approved application");
        return Err(SignUpError::ApplicationRequired);
    }

    if input.password != input.confirm_password {
        return Err(SignUpError::PasswordMismatch);
    }

    if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SignUpError::PasswordTooShort);
    }

    if Profile::find_by_email(&email, &deps.db_pool).await?.is_some() {
        return Err(SignUpError::AccountExists);
    }

    let password = input.password;
    let password = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task failed")?;

    let create = CreateProfile {
        email,
        full_name,
        user_type: UserType::Creator,
        password,
    };

    // A concurrent sign-up can still win the race past the lookup above.
    let profile = Profile::create(&create, &deps.db_pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                SignUpError::AccountExists
            } else {
                SignUpError::Internal(e)
            }
        })?;

    let token = deps
        .jwt_service
        .create_token(profile.id, &profile.email, profile.is_admin)?;

    info!(profile_id = %profile.id, email = %profile.email, "Creator account created");

    Ok(SignUpResult { profile, token })
}
