//! Brands domain - collaboration requests from companies

pub mod actions;
pub mod data;
pub mod models;

pub use data::BrandSubmissionData;
pub use models::BrandSubmission;
