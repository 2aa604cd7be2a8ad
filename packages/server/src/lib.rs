// Creator Network - API Core
//
// Backend for the platform connecting student creators with brands: creator
// applications, admin approval, the sign-up gate, communities and the
// transactional emails that tie them together.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
