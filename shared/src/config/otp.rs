//! OTP provider configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which OTP provider implementation to wire at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpProviderKind {
    /// Twilio Verify (production)
    Twilio,
    /// In-process mock (development and tests)
    Mock,
}

impl std::str::FromStr for OtpProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(OtpProviderKind::Twilio),
            "mock" => Ok(OtpProviderKind::Mock),
            other => Err(format!("unknown OTP provider: {}", other)),
        }
    }
}

/// OTP provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Selected provider implementation
    pub provider: OtpProviderKind,

    /// Twilio Account SID (required for the twilio provider)
    pub account_sid: Option<String>,

    /// Twilio Auth Token (required for the twilio provider)
    pub auth_token: Option<String>,

    /// Twilio Verify service SID (required for the twilio provider)
    pub verify_service_sid: Option<String>,

    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,
}

impl OtpConfig {
    /// Create from environment variables
    ///
    /// `OTP_PROVIDER` selects the implementation (default `mock`). When
    /// `twilio` is selected, the three Twilio variables become required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider: OtpProviderKind = std::env::var("OTP_PROVIDER")
            .unwrap_or_else(|_| "mock".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "OTP_PROVIDER".to_string(),
                value: std::env::var("OTP_PROVIDER").unwrap_or_default(),
            })?;

        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok();
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok();
        let verify_service_sid = std::env::var("TWILIO_VERIFY_SERVICE_SID").ok();

        if provider == OtpProviderKind::Twilio {
            for (name, value) in [
                ("TWILIO_ACCOUNT_SID", &account_sid),
                ("TWILIO_AUTH_TOKEN", &auth_token),
                ("TWILIO_VERIFY_SERVICE_SID", &verify_service_sid),
            ] {
                if value.is_none() {
                    return Err(ConfigError::MissingVariable {
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            provider,
            account_sid,
            auth_token,
            verify_service_sid,
            request_timeout_secs: std::env::var("OTP_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("twilio".parse::<OtpProviderKind>(), Ok(OtpProviderKind::Twilio));
        assert_eq!("Mock".parse::<OtpProviderKind>(), Ok(OtpProviderKind::Mock));
        assert!("carrier-pigeon".parse::<OtpProviderKind>().is_err());
    }
}
