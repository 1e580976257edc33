//! Types crossing the auth boundary: credentials out, session in.
//!
//! The registration payload carries the chosen role and the profile fields as
//! auxiliary `data` metadata, the same shape the hosted auth service stores on
//! the user record and later copies into the profile row.

use serde::{Deserialize, Serialize};

/// Account kind chosen with the registration switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Freelancer,
    Client,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Freelancer => "freelancer",
            Role::Client => "client",
        }
    }
}

/// Profile fields sent alongside the credentials at sign-up. Fields not
/// relevant to the chosen role stay empty strings, matching what the service
/// expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub location: String,
    pub role: Role,
}

/// Everything needed for one sign-up call.
#[derive(Clone, Debug, PartialEq)]
pub struct SignUpParams {
    pub email: String,
    pub password: String,
    /// Target for the confirmation-email link, normally the page origin.
    pub redirect_to: String,
    pub metadata: SignUpMetadata,
}

/// Authenticated user embedded in a session response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Session returned by a successful password sign-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Error body shapes the auth and REST endpoints produce. Which field is
/// populated varies by endpoint and failure kind.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl ErrorBody {
    /// Pick whichever message the service provided, falling back to the HTTP
    /// status line.
    pub(crate) fn into_message(self, status: reqwest::StatusCode) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .unwrap_or_else(|| status.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_serializes_role_tag_lowercase() {
        let metadata = SignUpMetadata {
            first_name: "Ana".to_string(),
            last_name: "Horvat".to_string(),
            company_name: String::new(),
            location: "Hrvatska".to_string(),
            role: Role::Freelancer,
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["role"], "freelancer");
        assert_eq!(value["first_name"], "Ana");
        assert_eq!(value["company_name"], "");
        assert!(value.get("city").is_none());
    }

    #[test]
    fn error_body_prefers_msg_then_message_then_description() {
        let status = reqwest::StatusCode::BAD_REQUEST;

        let body: ErrorBody =
            serde_json::from_str(r#"{"msg":"User already registered"}"#).unwrap();
        assert_eq!(body.into_message(status), "User already registered");

        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Invalid login credentials"}"#).unwrap();
        assert_eq!(body.into_message(status), "Invalid login credentials");

        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#)
                .unwrap();
        assert_eq!(body.into_message(status), "Email not confirmed");
    }

    #[test]
    fn empty_error_body_falls_back_to_status_line() {
        let body = ErrorBody::default();
        assert_eq!(
            body.into_message(reqwest::StatusCode::BAD_REQUEST),
            "400 Bad Request"
        );
    }

    #[test]
    fn session_tolerates_missing_optional_fields() {
        let session: Session = serde_json::from_str(
            r#"{"access_token":"tok","token_type":"bearer"}"#,
        )
        .unwrap();
        assert_eq!(session.access_token, "tok");
        assert!(session.user.is_none());
    }
}
