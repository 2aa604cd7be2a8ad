use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

const REDACTED: &str = "[redacted]";

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Public origin of the web app, used to build sign-up and community links
    pub site_url: String,
    pub allowed_origins: Vec<String>,
    pub smtp: SmtpConfig,
}

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_name: String,
    pub timeout: Duration,
}

// Secrets and the database URL (which carries credentials) stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &REDACTED)
            .field("port", &self.port)
            .field("jwt_secret", &REDACTED)
            .field("jwt_issuer", &self.jwt_issuer)
            .field("site_url", &self.site_url)
            .field("allowed_origins", &self.allowed_origins)
            .field("smtp", &self.smtp)
            .finish()
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("from_name", &self.from_name)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "creator-network".to_string()),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "https://yourdomain.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").context("SMTP_HOST must be set")?,
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "465".to_string())
                    .parse()
                    .context("SMTP_PORT must be a valid number")?,
                username: env::var("SMTP_USER").context("SMTP_USER must be set")?,
                password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD must be set")?,
                from_name: env::var("SMTP_FROM_NAME")
                    .unwrap_or_else(|_| "Nano Community".to_string()),
                timeout: Duration::from_secs(
                    env::var("SMTP_TIMEOUT_SECS")
                        .unwrap_or_else(|_| "10".to_string())
                        .parse()
                        .context("SMTP_TIMEOUT_SECS must be a valid number")?,
                ),
            },
        })
    }
}

/// Split a comma-separated origin list. Empty input means "any origin".
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}
