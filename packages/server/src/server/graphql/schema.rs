//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::{error, info};
use uuid::Uuid;

use super::context::GraphQLContext;
use crate::common::validation::normalize_email;
use crate::common::{SubmissionId, SubmitError, GENERIC_FAILURE};

// Domain actions
use crate::domains::accounts::actions as account_actions;
use crate::domains::brands::actions as brand_actions;
use crate::domains::communities::actions as community_actions;
use crate::domains::creators::actions as creator_actions;
use crate::domains::submissions::actions as submission_actions;

// Domain data types (GraphQL types)
use crate::domains::accounts::data::{SignUpInput, SignUpResultData};
use crate::domains::brands::data::{BrandRequestInput, BrandSubmissionData};
use crate::domains::communities::data::{
    CommunityData, CommunityResultData, CreateCommunityInput,
};
use crate::domains::creators::data::{CreatorProfileData, CreatorProfileInput, EarningsData};
use crate::domains::squads::SquadData;
use crate::domains::submissions::data::{
    ApplicationStatusData, ApprovalResultData, CreatorApplicationInput, SubmissionData,
};

// Domain models (for queries)
use crate::domains::accounts::gate::{check_approval, GateDecision};
use crate::domains::brands::models::BrandSubmission;
use crate::domains::communities::models::Community;
use crate::domains::creators::models::CreatorProfile;
use crate::domains::squads::models::Squad;
use crate::domains::submissions::models::{Submission, SubmissionStatus};

// =============================================================================
// Helper functions
// =============================================================================

/// Log an internal failure and hand the client the generic notice.
///
/// Datastore and mailer errors never reach the response body.
fn to_field_error(e: anyhow::Error) -> FieldError {
    error!(error = %format!("{:#}", e), "Resolver failed");
    FieldError::new(GENERIC_FAILURE, juniper::Value::null())
}

fn submit_error(e: SubmitError) -> FieldError {
    FieldError::new(e.user_message(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Submission Queries
    // =========================================================================

    /// Creator applications, newest first (admin only)
    async fn creator_submissions(
        ctx: &GraphQLContext,
        status: Option<SubmissionStatus>,
    ) -> FieldResult<Vec<SubmissionData>> {
        ctx.require_admin()?;

        let submissions = Submission::list(status, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(submissions.into_iter().map(SubmissionData::from).collect())
    }

    /// Brand collaboration requests, newest first (admin only)
    async fn brand_submissions(ctx: &GraphQLContext) -> FieldResult<Vec<BrandSubmissionData>> {
        ctx.require_admin()?;

        let submissions = BrandSubmission::list(&ctx.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(submissions
            .into_iter()
            .map(BrandSubmissionData::from)
            .collect())
    }

    /// Whether an email has an approved application (drives the sign-up page)
    async fn application_status(
        ctx: &GraphQLContext,
        email: String,
    ) -> FieldResult<ApplicationStatusData> {
        let email = normalize_email(&email)?;
        let decision = check_approval(&email, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(ApplicationStatusData {
            email,
            approved: decision == GateDecision::Approved,
        })
    }

    // =========================================================================
    // Community Queries
    // =========================================================================

    async fn squads(ctx: &GraphQLContext) -> FieldResult<Vec<SquadData>> {
        let squads = Squad::list_active(&ctx.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(squads.into_iter().map(SquadData::from).collect())
    }

    async fn communities(ctx: &GraphQLContext) -> FieldResult<Vec<CommunityData>> {
        let communities = Community::list(&ctx.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(communities.into_iter().map(CommunityData::from).collect())
    }

    // =========================================================================
    // Creator Dashboard Queries
    // =========================================================================

    /// The caller's creator profile; null until profile setup is done
    async fn my_creator_profile(ctx: &GraphQLContext) -> FieldResult<Option<CreatorProfileData>> {
        let user = ctx.require_user()?;

        let creator = CreatorProfile::find_by_profile_id(user.profile_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(creator.map(CreatorProfileData::from))
    }

    /// Squads the caller is an active member of
    async fn my_squads(ctx: &GraphQLContext) -> FieldResult<Vec<SquadData>> {
        let user = ctx.require_user()?;

        let squads = creator_actions::my_squads(user.profile_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(squads.into_iter().map(SquadData::from).collect())
    }

    async fn my_earnings(ctx: &GraphQLContext) -> FieldResult<EarningsData> {
        let user = ctx.require_user()?;

        let summary = creator_actions::my_earnings(user.profile_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(summary.into())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Intake Mutations
    // =========================================================================

    /// Submit a creator application (public)
    async fn submit_creator_application(
        ctx: &GraphQLContext,
        input: CreatorApplicationInput,
    ) -> FieldResult<SubmissionData> {
        let submission = submission_actions::submit_creator_application(input, ctx.deps())
            .await
            .map_err(submit_error)?;
        Ok(submission.into())
    }

    /// Submit a brand collaboration request (public)
    async fn submit_brand_request(
        ctx: &GraphQLContext,
        input: BrandRequestInput,
    ) -> FieldResult<BrandSubmissionData> {
        let submission = brand_actions::submit_brand_request(input, ctx.deps())
            .await
            .map_err(submit_error)?;
        Ok(submission.into())
    }

    // =========================================================================
    // Review Mutations
    // =========================================================================

    /// Approve a creator application and email the applicant (admin only)
    ///
    /// The approval stands when the email fails; check `notificationError`.
    async fn approve_creator_submission(
        ctx: &GraphQLContext,
        id: Uuid,
    ) -> FieldResult<ApprovalResultData> {
        let admin = ctx.require_admin()?;
        info!(admin = %admin.email, submission_id = %id, "approve_creator_submission called");

        let outcome =
            submission_actions::approve_submission(SubmissionId::from_uuid(id), ctx.deps())
                .await
                .map_err(|e| {
                    error!(submission_id = %id, "Approval failed");
                    to_field_error(e)
                })?;

        Ok(outcome.into())
    }

    // =========================================================================
    // Account Mutations
    // =========================================================================

    /// Create a creator account; requires an approved application
    async fn sign_up(ctx: &GraphQLContext, input: SignUpInput) -> FieldResult<SignUpResultData> {
        let result = account_actions::sign_up(input, ctx.deps())
            .await
            .map_err(|e| {
                if matches!(e, crate::domains::accounts::SignUpError::Internal(_)) {
                    error!(error = %e, "Sign-up failed");
                }
                FieldError::new(e.user_message(), juniper::Value::null())
            })?;
        Ok(result.into())
    }

    // =========================================================================
    // Community Mutations
    // =========================================================================

    /// Create a community and email its creator the join link
    async fn create_community(
        ctx: &GraphQLContext,
        input: CreateCommunityInput,
    ) -> FieldResult<CommunityResultData> {
        ctx.require_user()?;

        let outcome = community_actions::create_community(input, ctx.deps())
            .await
            .map_err(submit_error)?;
        Ok(outcome.into())
    }

    /// Create or update the caller's creator profile
    async fn upsert_creator_profile(
        ctx: &GraphQLContext,
        input: CreatorProfileInput,
    ) -> FieldResult<CreatorProfileData> {
        let user = ctx.require_user()?;

        let creator = creator_actions::upsert_creator_profile(user.profile_id, input, ctx.deps())
            .await
            .map_err(submit_error)?;
        Ok(creator.into())
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
