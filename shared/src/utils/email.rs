//! Email address utilities
//!
//! Accounts are addressed by email across multiple credential sub-records
//! (local password, Google OAuth), so every lookup and comparison must go
//! through the same normalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email format check. Full RFC 5322 validation is deliberately
/// not attempted; the mail provider is the final authority.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Validate the format of an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Normalize an email address for storage and comparison
///
/// Identity lookups treat the local and Google emails as equivalent, so
/// both are normalized the same way before matching.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `jane.doe@example.com` becomes `j***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
