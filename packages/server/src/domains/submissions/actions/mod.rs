//! Submission actions - creator application intake and admin approval
//!
//! Actions are async functions called directly from GraphQL resolvers and the
//! function endpoints. They take `ServerDeps` explicitly and return plain values.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::common::{submit_form, SubmissionId, SubmitError};
use crate::domains::notifications::{dispatch, Notification};
use crate::domains::submissions::data::CreatorApplicationInput;
use crate::domains::submissions::models::Submission;
use crate::kernel::ServerDeps;

/// Result of approving a submission.
///
/// The status update and the email are separate steps: the submission can be
/// approved while the email failed. That partial failure is carried here so
/// the caller can show it to the operator.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    pub submission: Submission,
    pub notification_error: Option<String>,
}

impl ApprovalOutcome {
    pub fn notified(&self) -> bool {
        self.notification_error.is_none()
    }
}

/// Validate and store a creator application (status = pending).
pub async fn submit_creator_application(
    input: CreatorApplicationInput,
    deps: &ServerDeps,
) -> Result<Submission, SubmitError> {
    let submission = submit_form(input, |valid| async move {
        Submission::create(&valid, &deps.db_pool).await
    })
    .await?;

    info!(submission_id = %submission.id, email = %submission.email, "Creator application submitted");
    Ok(submission)
}

/// Approve a submission and send the approval email.
///
/// If the status update fails the email is never attempted. Approving an
/// already-approved submission re-stamps `approved_at` and re-sends the email.
pub async fn approve_submission(id: SubmissionId, deps: &ServerDeps) -> Result<ApprovalOutcome> {
    info!(submission_id = %id, "Approving creator submission");

    let submission = Submission::approve(id, &deps.db_pool)
        .await
        .with_context(|| format!("Failed to update submission {}", id))?
        .with_context(|| format!("Submission not found: {}", id))?;

    let notification =
        Notification::creator_approval(&submission.email, &submission.name, &deps.site_url);

    let notification_error = match dispatch(&notification, deps.mailer.as_ref()).await {
        Ok(()) => {
            info!(submission_id = %id, "Approval email sent");
            None
        }
        Err(e) => {
            error!(
                submission_id = %id,
                error = %format!("{:#}", e),
                "Submission approved but approval email failed"
            );
            Some(format!("{:#}", e))
        }
    };

    Ok(ApprovalOutcome {
        submission,
        notification_error,
    })
}
