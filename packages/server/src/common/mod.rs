// Common types and utilities shared across domains

pub mod auth;
pub mod entity_ids;
pub mod form;
pub mod id;
pub mod validation;

pub use auth::{require_admin, require_user, AuthError, AuthUser};
pub use entity_ids::*;
pub use form::{submit_form, FormError, FormInput, FormMachine, FormPhase, SubmitError, GENERIC_FAILURE};
pub use validation::ValidationError;
