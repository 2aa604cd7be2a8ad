pub mod brand_submission;

pub use brand_submission::{BrandSubmission, CreateBrandSubmission};
