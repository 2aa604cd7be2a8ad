use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::validation::{normalize_email, optional, required};
use crate::common::{FormInput, ValidationError};
use crate::domains::submissions::actions::ApprovalOutcome;
use crate::domains::submissions::models::{CreateSubmission, Submission, SubmissionStatus};

/// Platform recorded when the form leaves it blank
pub const DEFAULT_PLATFORM: &str = "Instagram";

/// Creator application GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A creator application awaiting or past admin review")]
pub struct SubmissionData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub platform: String,
    pub profile_url: String,
    pub followers: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionData {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.into_uuid(),
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            platform: submission.platform,
            profile_url: submission.profile_url,
            followers: submission.followers,
            status: submission.status,
            created_at: submission.created_at,
            approved_at: submission.approved_at,
        }
    }
}

/// Public creator application form
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct CreatorApplicationInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to Instagram
    pub platform: Option<String>,
    /// Profile handle or URL
    pub profile_url: String,
    pub followers: String,
}

impl FormInput for CreatorApplicationInput {
    type Valid = CreateSubmission;

    fn validate(&self) -> Result<CreateSubmission, ValidationError> {
        Ok(CreateSubmission {
            name: required("name", &self.name)?,
            email: normalize_email(&self.email)?,
            phone: optional(self.phone.as_deref()),
            platform: optional(self.platform.as_deref())
                .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            profile_url: required("profile", &self.profile_url)?,
            followers: required("followers", &self.followers)?,
        })
    }
}

/// Result of an admin approval
#[derive(Debug, Clone, GraphQLObject)]
pub struct ApprovalResultData {
    pub submission: SubmissionData,
    /// Whether the approval email went out
    pub notified: bool,
    /// Set when the submission was approved but the email failed
    pub notification_error: Option<String>,
}

impl From<ApprovalOutcome> for ApprovalResultData {
    fn from(outcome: ApprovalOutcome) -> Self {
        Self {
            notified: outcome.notified(),
            notification_error: outcome.notification_error,
            submission: outcome.submission.into(),
        }
    }
}

/// Whether an email has an approved application (the account gate, exposed read-only)
#[derive(Debug, Clone, GraphQLObject)]
pub struct ApplicationStatusData {
    pub email: String,
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> CreatorApplicationInput {
        CreatorApplicationInput {
            name: "Jane Doe".to_string(),
            email: "Jane@X.edu".to_string(),
            phone: Some("  ".to_string()),
            platform: None,
            profile_url: "@jane".to_string(),
            followers: "5000".to_string(),
        }
    }

    #[test]
    fn test_validate_normalizes_and_defaults() {
        let valid = jane().validate().unwrap();
        assert_eq!(valid.email, "jane@x.edu");
        assert_eq!(valid.platform, "Instagram");
        assert_eq!(valid.phone, None);
    }

    #[test]
    fn test_validate_requires_fields() {
        let mut input = jane();
        input.followers = String::new();
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::Required("followers")
        );

        let mut input = jane();
        input.email = "jane".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }
}
