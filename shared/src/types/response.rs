//! API response types
//!
//! The frontend consumes a flat `{ success, message }` body from every
//! verification endpoint, so the wrapper carries no data payload.

use serde::{Deserialize, Serialize};

/// Standard status response for verification endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl StatusResponse {
    /// Create a successful response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response() {
        let resp = StatusResponse::ok("Email verified successfully");
        assert!(resp.success);
        assert_eq!(resp.message, "Email verified successfully");
    }

    #[test]
    fn test_fail_response_serializes_flat() {
        let resp = StatusResponse::fail("User not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "User not found" })
        );
    }

    #[test]
    fn test_round_trip() {
        let body = r#"{"success":false,"message":"Too many verification attempts. Please try again in 2 minutes"}"#;
        let resp: StatusResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.success);
        assert!(resp.message.contains("2 minutes"));
    }
}
