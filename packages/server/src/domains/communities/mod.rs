//! Communities domain - creator communities and their invites

pub mod actions;
pub mod data;
pub mod models;

pub use data::CommunityData;
pub use models::Community;
