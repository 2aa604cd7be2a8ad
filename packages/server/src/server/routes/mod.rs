// HTTP routes
pub mod functions;
pub mod graphql;
pub mod health;

pub use functions::*;
pub use graphql::*;
pub use health::*;
