//! Brand actions

use tracing::info;

use crate::common::{submit_form, SubmitError};
use crate::domains::brands::data::BrandRequestInput;
use crate::domains::brands::models::BrandSubmission;
use crate::kernel::ServerDeps;

/// Validate and store a brand collaboration request.
pub async fn submit_brand_request(
    input: BrandRequestInput,
    deps: &ServerDeps,
) -> Result<BrandSubmission, SubmitError> {
    let submission = submit_form(input, |valid| async move {
        BrandSubmission::create(&valid, &deps.db_pool).await
    })
    .await?;

    info!(brand_submission_id = %submission.id, company = %submission.company_name, "Brand request submitted");
    Ok(submission)
}
