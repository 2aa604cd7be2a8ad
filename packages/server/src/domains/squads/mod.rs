//! Squads domain - read-only listing

pub mod data;
pub mod models;

pub use data::SquadData;
pub use models::Squad;
