// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use super::BaseMailer;

// =============================================================================
// Mock Mailer
// =============================================================================

/// An email captured by the mock instead of being relayed.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to_email: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    /// All emails accepted so far
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Emails accepted for a given recipient
    pub fn sent_to(&self, email: &str) -> Vec<SentEmail> {
        self.sent()
            .into_iter()
            .filter(|e| e.to_email == email)
            .collect()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send_html(
        &self,
        to_email: &str,
        to_name: Option<&str>,
        subject: &str,
        html: &str,
    ) -> Result<()> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        self.sent.lock().unwrap().push(SentEmail {
            to_email: to_email.to_string(),
            to_name: to_name.map(str::to_string),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
