//! Server dependencies shared by actions and handlers (traits for testability)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mailer::{MailerService, OutgoingEmail};
use sqlx::PgPool;

use crate::domains::auth::JwtService;
use crate::kernel::BaseMailer;

// =============================================================================
// MailerService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around MailerService that implements BaseMailer trait
pub struct MailerAdapter(pub Arc<MailerService>);

impl MailerAdapter {
    pub fn new(service: Arc<MailerService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for MailerAdapter {
    async fn send_html(
        &self,
        to_email: &str,
        to_name: Option<&str>,
        subject: &str,
        html: &str,
    ) -> Result<()> {
        let email = OutgoingEmail {
            to_email: to_email.to_string(),
            to_name: to_name.map(str::to_string),
            subject: subject.to_string(),
            html: html.to_string(),
        };

        self.0.send(&email).await.map_err(Into::into)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies every action receives explicitly; there are no globals.
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub mailer: Arc<dyn BaseMailer>,
    pub jwt_service: Arc<JwtService>,
    /// Public origin of the web app (no trailing slash)
    pub site_url: String,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        mailer: Arc<dyn BaseMailer>,
        jwt_service: Arc<JwtService>,
        site_url: String,
    ) -> Self {
        Self {
            db_pool,
            mailer,
            jwt_service,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }
}
