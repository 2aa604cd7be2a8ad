// Business domains
pub mod accounts;
pub mod auth;
pub mod brands;
pub mod communities;
pub mod creators;
pub mod notifications;
pub mod squads;
pub mod submissions;
