// include the model for api input, output. EX: OtpRequest, MessageResponse....

use notification::Address;
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct WelcomeRequest {
    #[serde(deserialize_with = "email_address")]
    #[schema(value_type = String, format = Email, example = "a@b.com")]
    pub email: Address,

    #[serde(deserialize_with = "non_empty_string")]
    #[schema(min_length = 1, example = "Alice")]
    pub username: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct OtpRequest {
    #[serde(deserialize_with = "email_address")]
    #[schema(value_type = String, format = Email, example = "a@b.com")]
    pub email: Address,

    #[serde(deserialize_with = "non_empty_string")]
    #[schema(min_length = 1, example = "Alice")]
    pub username: String,

    /// Rendered verbatim, no format is enforced.
    #[schema(example = "482913")]
    pub otp: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct PasswordResetRequest {
    #[serde(deserialize_with = "email_address")]
    #[schema(value_type = String, format = Email, example = "a@b.com")]
    pub email: Address,

    #[serde(deserialize_with = "non_empty_string")]
    #[schema(min_length = 1, example = "Alice")]
    pub username: String,

    /// Rendered verbatim, not checked to be a well formed URL.
    #[schema(example = "https://lms.example.com/reset-password?token=abc123")]
    pub reset_url: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "OTP email sent successfully.")]
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn welcome_sent() -> Self { Self { message: "Welcome email sent successfully.".to_string() } }

    #[must_use]
    pub fn otp_sent() -> Self { Self { message: "OTP email sent successfully.".to_string() } }

    #[must_use]
    pub fn password_reset_sent() -> Self {
        Self { message: "Password reset email sent successfully.".to_string() }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "SMBJugaad Email Service")]
    pub service: String,
}

impl HealthStatus {
    #[must_use]
    pub fn healthy<S: Into<String>>(service: S) -> Self {
        Self { status: "healthy".to_string(), service: service.into() }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if value.trim().is_empty() {
        return Err(de::Error::invalid_value(de::Unexpected::Str(&value), &"a non-empty string"));
    }

    Ok(value)
}

/// Accepts only addresses whose domain is a dotted host name, so neither
/// `user@localhost` nor a domain literal such as `user@[10.0.0.1]` passes.
fn email_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let address = Address::deserialize(deserializer)?;
    let domain = address.domain();

    if domain.starts_with('[') || !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(address.as_ref()),
            &"an email address with a dotted domain name",
        ));
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_otp_request_from_json() {
        let request: OtpRequest =
            serde_json::from_value(json!({ "email": "a@b.com", "username": "Alice", "otp": "482913" }))
                .unwrap();

        assert_eq!(request.email.to_string(), "a@b.com");
        assert_eq!(request.username, "Alice");
        assert_eq!(request.otp, "482913");
    }

    #[test]
    fn test_password_reset_request_uses_snake_case() {
        let request: PasswordResetRequest = serde_json::from_value(json!({
            "email": "a@b.com",
            "username": "Alice",
            "reset_url": "https://lms.example.com/reset?token=1"
        }))
        .unwrap();

        assert_eq!(request.reset_url, "https://lms.example.com/reset?token=1");
        assert!(serde_json::from_value::<PasswordResetRequest>(json!({
            "email": "a@b.com",
            "username": "Alice",
            "resetUrl": "https://lms.example.com/reset?token=1"
        }))
        .is_err());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let result = serde_json::from_value::<WelcomeRequest>(
            json!({ "email": "not-an-email", "username": "Alice" }),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_undotted_or_literal_domain_is_rejected() {
        for email in ["a@b", "u@[1.2.3.4]", "user@localhost"] {
            let result =
                serde_json::from_value::<WelcomeRequest>(json!({ "email": email, "username": "A" }));

            assert!(
                result.unwrap_err().to_string().contains("a dotted domain name"),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_subdomain_email_is_accepted() {
        let request: WelcomeRequest = serde_json::from_value(
            json!({ "email": "first.last@mail.example.co.uk", "username": "A" }),
        )
        .unwrap();

        assert_eq!(request.email.domain(), "mail.example.co.uk");
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let result =
            serde_json::from_value::<WelcomeRequest>(json!({ "email": "a@b.com", "username": "  " }));

        assert!(result.unwrap_err().to_string().contains("a non-empty string"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_value::<OtpRequest>(json!({ "email": "a@b.com", "username": "Alice" }));

        assert!(result.unwrap_err().to_string().contains("missing field `otp`"));
    }

    #[test]
    fn test_response_bodies() {
        assert_eq!(
            serde_json::to_value(MessageResponse::otp_sent()).unwrap(),
            json!({ "message": "OTP email sent successfully." })
        );
        assert_eq!(
            serde_json::to_value(HealthStatus::healthy("SMBJugaad Email Service")).unwrap(),
            json!({ "status": "healthy", "service": "SMBJugaad Email Service" })
        );
    }
}
