//! Twilio Verify OTP Provider Implementation
//!
//! Implements the OtpProvider trait against the Twilio Verify v2 REST API.
//! Twilio owns the whole challenge lifecycle: code generation, delivery,
//! expiry and single-use enforcement. This client only creates verifications
//! and submits verification checks.
//!
//! Dispatch is not retried: re-creating a verification is not idempotent and
//! would send the user a second code, so failures surface immediately.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use vt_core::services::verification::{CodeCheck, OtpProvider};
use vt_shared::config::OtpConfig;
use vt_shared::utils::phone::mask_phone;

use crate::InfrastructureError;

/// Twilio Verify API base URL
const TWILIO_VERIFY_BASE_URL: &str = "https://verify.twilio.com/v2";

/// Twilio Verify service configuration
#[derive(Debug, Clone)]
pub struct TwilioVerifyConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify service SID (the "VA..." identifier)
    pub verify_service_sid: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
    /// API base URL, overridable for tests
    pub base_url: String,
}

impl TwilioVerifyConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let verify_service_sid = std::env::var("TWILIO_VERIFY_SERVICE_SID").map_err(|_| {
            InfrastructureError::Config("TWILIO_VERIFY_SERVICE_SID not set".to_string())
        })?;

        Ok(Self {
            account_sid,
            auth_token,
            verify_service_sid,
            request_timeout_secs: std::env::var("OTP_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            base_url: TWILIO_VERIFY_BASE_URL.to_string(),
        })
    }

    /// Create configuration from a shared OtpConfig
    pub fn from_otp_config(config: &OtpConfig) -> Result<Self, InfrastructureError> {
        let required = |value: &Option<String>, name: &str| {
            value
                .clone()
                .ok_or_else(|| InfrastructureError::Config(format!("{} not set", name)))
        };

        Ok(Self {
            account_sid: required(&config.account_sid, "TWILIO_ACCOUNT_SID")?,
            auth_token: required(&config.auth_token, "TWILIO_AUTH_TOKEN")?,
            verify_service_sid: required(&config.verify_service_sid, "TWILIO_VERIFY_SERVICE_SID")?,
            request_timeout_secs: config.request_timeout_secs,
            base_url: TWILIO_VERIFY_BASE_URL.to_string(),
        })
    }
}

/// Twilio Verify OTP provider
pub struct TwilioVerifyProvider {
    client: reqwest::Client,
    config: TwilioVerifyConfig,
}

/// Relevant subset of a Verification / VerificationCheck resource
#[derive(Debug, Deserialize)]
struct VerificationResource {
    sid: String,
    status: String,
}

impl TwilioVerifyProvider {
    /// Create a new Twilio Verify provider
    pub fn new(config: TwilioVerifyConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Provider(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            verify_service_sid = %config.verify_service_sid,
            "Twilio Verify provider initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(TwilioVerifyConfig::from_env()?)
    }

    fn verifications_url(&self) -> String {
        format!(
            "{}/Services/{}/Verifications",
            self.config.base_url, self.config.verify_service_sid
        )
    }

    fn verification_checks_url(&self) -> String {
        format!(
            "{}/Services/{}/VerificationCheck",
            self.config.base_url, self.config.verify_service_sid
        )
    }

    /// POST a form to the Verify API and deserialize the resource
    async fn post_form(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<VerificationResource, String> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(params)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(http_status = %status, "Twilio Verify API error");
            return Err(format!("provider returned {}: {}", status, body));
        }

        response
            .json::<VerificationResource>()
            .await
            .map_err(|e| format!("invalid provider response: {}", e))
    }
}

#[async_trait]
impl OtpProvider for TwilioVerifyProvider {
    async fn request_code(&self, phone: &str) -> Result<String, String> {
        debug!(
            phone = %mask_phone(phone),
            "creating verification challenge"
        );

        let params = [("To", phone), ("Channel", "sms")];
        let verification = self.post_form(&self.verifications_url(), &params).await?;

        info!(
            phone = %mask_phone(phone),
            sid = %verification.sid,
            status = %verification.status,
            "verification challenge created"
        );

        Ok(verification.sid)
    }

    async fn check_code(&self, phone: &str, code: &str) -> Result<CodeCheck, String> {
        let params = [("To", phone), ("Code", code)];
        let check = self
            .post_form(&self.verification_checks_url(), &params)
            .await?;

        debug!(
            phone = %mask_phone(phone),
            status = %check.status,
            "verification check completed"
        );

        if check.status == "approved" {
            Ok(CodeCheck::Approved)
        } else {
            Ok(CodeCheck::Denied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TwilioVerifyConfig {
        TwilioVerifyConfig {
            account_sid: "ACtest".to_string(),
            auth_token: "token".to_string(),
            verify_service_sid: "VAtest".to_string(),
            request_timeout_secs: 30,
            base_url: TWILIO_VERIFY_BASE_URL.to_string(),
        }
    }

    #[test]
    fn test_endpoint_urls() {
        let provider = TwilioVerifyProvider::new(test_config()).unwrap();

        assert_eq!(
            provider.verifications_url(),
            "https://verify.twilio.com/v2/Services/VAtest/Verifications"
        );
        assert_eq!(
            provider.verification_checks_url(),
            "https://verify.twilio.com/v2/Services/VAtest/VerificationCheck"
        );
    }

    #[test]
    fn test_from_otp_config_requires_credentials() {
        let config = OtpConfig {
            provider: vt_shared::config::OtpProviderKind::Twilio,
            account_sid: Some("ACtest".to_string()),
            auth_token: None,
            verify_service_sid: Some("VAtest".to_string()),
            request_timeout_secs: 30,
        };

        let result = TwilioVerifyConfig::from_otp_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("TWILIO_AUTH_TOKEN"));
    }

    #[test]
    fn test_verification_resource_parsing() {
        let json = r#"{
            "sid": "VE1234567890",
            "status": "pending",
            "to": "+14085551234",
            "channel": "sms"
        }"#;

        let resource: VerificationResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.sid, "VE1234567890");
        assert_eq!(resource.status, "pending");
    }
}
