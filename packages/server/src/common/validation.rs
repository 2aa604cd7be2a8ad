//! Boundary validation for user-submitted form fields.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

/// Trim `value` and reject it when nothing is left.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field, collapsing blank input to `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalize an email address (trimmed, lower-cased) and do a shape check.
///
/// Submissions and sign-ups both pass through here so the account gate
/// compares addresses in the same form they were stored.
pub fn normalize_email(value: &str) -> Result<String, ValidationError> {
    let email = required("email", value)?.to_lowercase();

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail(email));
    };

    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');

    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail(email));
    }

    Ok(email)
}

/// Require an absolute http(s) link.
pub fn http_url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let url = required(field, value)?;
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(url)
    } else {
        Err(ValidationError::InvalidUrl(url))
    }
}

/// Audience counts are optional but never negative.
pub fn count(field: &'static str, value: Option<i32>) -> Result<Option<i32>, ValidationError> {
    match value {
        Some(n) if n < 0 => Err(ValidationError::Negative(field)),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("name", "  Jane Doe ").unwrap(), "Jane Doe");
        assert_eq!(
            required("name", "   ").unwrap_err(),
            ValidationError::Required("name")
        );
    }

    #[test]
    fn test_optional_collapses_blank() {
        assert_eq!(optional(Some("  ")), None);
        assert_eq!(optional(None), None);
        assert_eq!(optional(Some(" 555-0100 ")), Some("555-0100".to_string()));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Jane@X.edu ").unwrap(), "jane@x.edu");
        assert!(matches!(
            normalize_email("jane.x.edu"),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(normalize_email("@x.edu").is_err());
        assert!(normalize_email("jane@localhost").is_err());
        assert!(normalize_email("jane@@x.edu").is_err());
        assert!(normalize_email("ja ne@x.edu").is_err());
        assert_eq!(
            normalize_email("").unwrap_err(),
            ValidationError::Required("email")
        );
    }

    #[test]
    fn test_http_url() {
        assert!(http_url("join link", "https://example.com/c/1").is_ok());
        assert!(matches!(
            http_url("join link", "javascript:alert(1)"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_count_rejects_negative() {
        assert_eq!(count("TikTok followers", Some(1200)).unwrap(), Some(1200));
        assert_eq!(count("TikTok followers", None).unwrap(), None);
        assert_eq!(
            count("TikTok followers", Some(-1)).unwrap_err(),
            ValidationError::Negative("TikTok followers")
        );
    }
}
