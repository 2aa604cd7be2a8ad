//! Submissions domain - creator applications and their review
//!
//! Flow: submit (pending) -> admin approves (approved + approved_at) -> approval email

pub mod actions;
pub mod data;
pub mod models;

pub use actions::ApprovalOutcome;
pub use data::SubmissionData;
pub use models::{Submission, SubmissionStatus};
