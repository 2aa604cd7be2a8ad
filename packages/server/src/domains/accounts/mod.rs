//! Accounts domain - creator sign-up behind the approval gate

pub mod actions;
pub mod data;
pub mod errors;
pub mod gate;
pub mod models;
pub mod password;

pub use errors::SignUpError;
pub use gate::{check_approval, GateDecision};
pub use models::{CreateProfile, Profile, UserType};
