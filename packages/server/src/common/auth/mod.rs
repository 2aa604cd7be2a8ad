//! Request-scoped identity and the checks built on it.

mod errors;

pub use errors::AuthError;

use crate::common::ProfileId;

/// Authenticated caller, decoded from a bearer token by the JWT middleware.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub profile_id: ProfileId,
    pub email: String,
    pub is_admin: bool,
}

/// Require any authenticated caller.
pub fn require_user(user: Option<&AuthUser>) -> Result<&AuthUser, AuthError> {
    user.ok_or(AuthError::AuthenticationRequired)
}

/// Require an authenticated admin.
pub fn require_admin(user: Option<&AuthUser>) -> Result<&AuthUser, AuthError> {
    let user = require_user(user)?;
    if user.is_admin {
        Ok(user)
    } else {
        Err(AuthError::AdminRequired)
    }
}
