// Thin SMTP relay client used for transactional email.

use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, error};

/// Port on which relays expect implicit TLS. Every other port negotiates STARTTLS.
pub const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("SMTP send timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Clone)]
pub struct MailerOptions {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Display name for the `From` header. The address is always `username`.
    pub from_name: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for MailerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("from_name", &self.from_name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// A single HTML message ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to_email: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Clone)]
pub struct MailerService {
    options: MailerOptions,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl MailerService {
    pub fn new(options: MailerOptions) -> Result<Self, MailerError> {
        let builder = if options.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&options.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&options.host)?
        };

        let transport = builder
            .port(options.port)
            .credentials(Credentials::new(
                options.username.clone(),
                options.password.clone(),
            ))
            .timeout(Some(options.timeout))
            .build();

        Ok(Self { options, transport })
    }

    pub fn options(&self) -> &MailerOptions {
        &self.options
    }

    /// Send one message. There is no retry: the caller decides what a failure means.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let message = build_message(&self.options, email)?;

        debug!(to = %email.to_email, subject = %email.subject, "Relaying email");

        match tokio::time::timeout(self.options.timeout, self.transport.send(message)).await {
            Ok(Ok(_response)) => Ok(()),
            Ok(Err(e)) => {
                error!(to = %email.to_email, error = %e, "SMTP relay rejected message");
                Err(e.into())
            }
            Err(_) => {
                error!(to = %email.to_email, "SMTP relay timed out");
                Err(MailerError::Timeout(self.options.timeout))
            }
        }
    }
}

/// Assemble the MIME message for `email` using the sender configured in `options`.
pub fn build_message(options: &MailerOptions, email: &OutgoingEmail) -> Result<Message, MailerError> {
    let from_address: Address = options.username.parse()?;
    let to_address: Address = email.to_email.parse()?;

    let message = Message::builder()
        .from(Mailbox::new(options.from_name.clone(), from_address))
        .to(Mailbox::new(email.to_name.clone(), to_address))
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())?;

    Ok(message)
}
