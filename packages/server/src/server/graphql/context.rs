use std::sync::Arc;

use juniper::{FieldError, FieldResult};
use sqlx::PgPool;

use crate::common::{require_admin, require_user, AuthUser};
use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Shared resources plus the caller decoded by the JWT middleware.
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db_pool: PgPool, server_deps: Arc<ServerDeps>, auth_user: Option<AuthUser>) -> Self {
        Self {
            db_pool,
            server_deps,
            auth_user,
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.server_deps
    }

    pub fn require_user(&self) -> FieldResult<&AuthUser> {
        require_user(self.auth_user.as_ref())
            .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))
    }

    pub fn require_admin(&self) -> FieldResult<&AuthUser> {
        require_admin(self.auth_user.as_ref())
            .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))
    }
}
