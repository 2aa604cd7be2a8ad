//! Creators domain - profile setup and the creator dashboard

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CreatorProfileData, EarningsData};
pub use models::{CreatorProfile, Earning};
