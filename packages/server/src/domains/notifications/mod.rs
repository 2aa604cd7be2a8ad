//! Notification domain - the transactional emails
//!
//! A `Notification` is built at send time, rendered from one of the fixed
//! templates, handed to the mailer once and then dropped. Nothing is persisted.

pub mod templates;

use anyhow::{Context, Result};
use tracing::info;

use crate::kernel::BaseMailer;
use templates::RenderedEmail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// Creator application approved; carries the sign-up link
    CreatorApproval { signup_url: String },
    /// Community created; invites the creator to join it
    CommunityInvite {
        community_name: String,
        join_link: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient_email: String,
    pub recipient_name: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn creator_approval(recipient_email: &str, recipient_name: &str, site_url: &str) -> Self {
        Self {
            recipient_email: recipient_email.to_string(),
            recipient_name: recipient_name.to_string(),
            kind: NotificationKind::CreatorApproval {
                signup_url: templates::signup_url(site_url, recipient_email),
            },
        }
    }

    pub fn community_invite(
        recipient_email: &str,
        recipient_name: &str,
        community_name: &str,
        join_link: &str,
    ) -> Self {
        Self {
            recipient_email: recipient_email.to_string(),
            recipient_name: recipient_name.to_string(),
            kind: NotificationKind::CommunityInvite {
                community_name: community_name.to_string(),
                join_link: join_link.to_string(),
            },
        }
    }

    pub fn render(&self) -> Result<RenderedEmail> {
        match &self.kind {
            NotificationKind::CreatorApproval { signup_url } => {
                templates::creator_approval(&self.recipient_name, signup_url)
            }
            NotificationKind::CommunityInvite {
                community_name,
                join_link,
            } => templates::community_invite(&self.recipient_name, community_name, join_link),
        }
    }
}

/// Render and relay a notification. A single attempt; the mailer enforces the timeout.
pub async fn dispatch(notification: &Notification, mailer: &dyn BaseMailer) -> Result<()> {
    let email = notification.render()?;

    mailer
        .send_html(
            &notification.recipient_email,
            Some(&notification.recipient_name),
            &email.subject,
            &email.html,
        )
        .await
        .with_context(|| format!("Failed to send email to {}", notification.recipient_email))?;

    info!(to = %notification.recipient_email, subject = %email.subject, "Notification sent");
    Ok(())
}
