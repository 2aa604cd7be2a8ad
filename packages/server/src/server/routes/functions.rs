//! Function endpoints called by the dashboard.
//!
//! `POST /functions/send-creator-approval` and `POST /functions/send-community-invite`.
//! Both answer `{success, message}` on success and `{error}` otherwise.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::common::validation::{http_url, normalize_email, required};
use crate::common::{
    require_admin, require_user, AuthError, AuthUser, SubmissionId, ValidationError,
};
use crate::domains::notifications::{dispatch, Notification};
use crate::domains::submissions::actions::approve_submission;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorApprovalRequest {
    pub application_id: Uuid,
    /// Informational; the stored submission's address is used
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityInviteRequest {
    pub community_name: String,
    pub creator_name: String,
    pub creator_email: String,
    pub join_link: String,
}

impl CommunityInviteRequest {
    /// Trimmed, checked copy; the join link must be an http(s) URL.
    pub fn validate(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            community_name: required("community name", &self.community_name)?,
            creator_name: required("creator name", &self.creator_name)?,
            creator_email: normalize_email(&self.creator_email)?,
            join_link: http_url("join link", &self.join_link)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FunctionSuccess {
    pub success: bool,
    pub message: String,
}

impl FunctionSuccess {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub enum FunctionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<ValidationError> for FunctionError {
    fn from(e: ValidationError) -> Self {
        FunctionError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for FunctionError {
    fn from(rejection: JsonRejection) -> Self {
        FunctionError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let status = match &self {
            FunctionError::Auth(AuthError::AuthenticationRequired) => StatusCode::UNAUTHORIZED,
            FunctionError::Auth(AuthError::AdminRequired) => StatusCode::FORBIDDEN,
            FunctionError::BadRequest(_) => StatusCode::BAD_REQUEST,
            FunctionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Approve a creator submission and send the approval email (admin only).
///
/// A failed email after a successful approval is reported as a 500; the
/// submission stays approved.
pub async fn send_creator_approval(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    body: Result<Json<CreatorApprovalRequest>, JsonRejection>,
) -> Result<Json<FunctionSuccess>, FunctionError> {
    let admin = require_admin(auth_user.as_ref().map(|Extension(user)| user))?;
    let Json(request) = body?;

    info!(
        admin = %admin.email,
        application_id = %request.application_id,
        "send-creator-approval called"
    );

    let outcome = approve_submission(
        SubmissionId::from_uuid(request.application_id),
        &state.server_deps,
    )
    .await
    .map_err(|e| {
        let message = format!("{:#}", e);
        error!(application_id = %request.application_id, error = %message, "Approval failed");
        FunctionError::Internal(message)
    })?;

    if let Some(e) = outcome.notification_error {
        return Err(FunctionError::Internal(format!(
            "Submission approved but approval email failed: {}",
            e
        )));
    }

    Ok(FunctionSuccess::new("Approval email sent"))
}

/// Send the community invite email for an existing community.
pub async fn send_community_invite(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    body: Result<Json<CommunityInviteRequest>, JsonRejection>,
) -> Result<Json<FunctionSuccess>, FunctionError> {
    require_user(auth_user.as_ref().map(|Extension(user)| user))?;
    let Json(request) = body?;
    let request = request.validate()?;

    let notification = Notification::community_invite(
        &request.creator_email,
        &request.creator_name,
        &request.community_name,
        &request.join_link,
    );

    dispatch(&notification, state.server_deps.mailer.as_ref())
        .await
        .map_err(|e| {
            let message = format!("{:#}", e);
            warn!(community = %request.community_name, error = %message, "Invite email failed");
            FunctionError::Internal(message)
        })?;

    Ok(FunctionSuccess::new("Invite email sent successfully"))
}
