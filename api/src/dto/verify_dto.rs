use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use jp_shared::utils::email::is_valid_email;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(custom = "validate_email_format")]
    pub email: String,
    #[validate(length(equal = 6))]
    pub code: String,
}

/// Email format check shared with the rest of the platform, so the DTO
/// accepts exactly what the account store can be queried with
fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = VerifyEmailRequest {
            email: "jane@example.com".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = VerifyEmailRequest {
            email: "not-an-email".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_padded_email_accepted() {
        // The shared format check trims before matching, like the
        // normalization applied later in the flow.
        let request = VerifyEmailRequest {
            email: "  jane@example.com ".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_code_must_be_six_characters() {
        let request = VerifyEmailRequest {
            email: "jane@example.com".to_string(),
            code: "12345".to_string(),
        };
        assert!(request.validate().is_err());

        let request = VerifyEmailRequest {
            email: "jane@example.com".to_string(),
            code: "1234567".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
