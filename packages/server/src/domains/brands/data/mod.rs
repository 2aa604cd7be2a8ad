use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::validation::{normalize_email, optional, required};
use crate::common::{FormInput, ValidationError};
use crate::domains::brands::models::{BrandSubmission, CreateBrandSubmission};

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A brand's request to run a campaign with creators")]
pub struct BrandSubmissionData {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub campaign_details: String,
    pub created_at: DateTime<Utc>,
}

impl From<BrandSubmission> for BrandSubmissionData {
    fn from(submission: BrandSubmission) -> Self {
        Self {
            id: submission.id.into_uuid(),
            company_name: submission.company_name,
            contact_name: submission.contact_name,
            email: submission.email,
            phone: submission.phone,
            campaign_details: submission.campaign_details,
            created_at: submission.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct BrandRequestInput {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub campaign_details: String,
}

impl FormInput for BrandRequestInput {
    type Valid = CreateBrandSubmission;

    fn validate(&self) -> Result<CreateBrandSubmission, ValidationError> {
        Ok(CreateBrandSubmission {
            company_name: required("company name", &self.company_name)?,
            contact_name: required("contact name", &self.contact_name)?,
            email: normalize_email(&self.email)?,
            phone: optional(self.phone.as_deref()),
            campaign_details: required("campaign details", &self.campaign_details)?,
        })
    }
}
