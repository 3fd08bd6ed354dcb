//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use vt_shared::utils::phone::{is_valid_phone, mask_phone};
use vt_shared::utils::validation::{is_valid_email, not_empty};

use crate::domain::entities::user::User;
use crate::domain::value_objects::UserProfile;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use crate::services::verification::OtpProvider;

/// Authentication service for the complete registration and login flow
///
/// Stateless between requests: the only state it holds is the immutable
/// collaborator graph injected at construction. The pending-OTP state lives
/// entirely inside the external provider between the initiate and complete
/// calls.
pub struct AuthService<U, P>
where
    U: UserRepository,
    P: OtpProvider,
{
    /// User repository for directory lookups and inserts
    user_repository: Arc<U>,
    /// Remote OTP verification capability
    otp_provider: Arc<P>,
    /// Session token codec
    token_service: Arc<TokenService>,
}

impl<U, P> AuthService<U, P>
where
    U: UserRepository,
    P: OtpProvider,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, otp_provider: Arc<P>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            otp_provider,
            token_service,
        }
    }

    /// Register a new user by contact details
    ///
    /// This method:
    /// 1. Rejects empty `name`, `email` or `phone`
    /// 2. Validates email and phone syntax
    /// 3. Rejects if either contact value is already registered
    /// 4. Inserts the new user
    ///
    /// No token is issued and no OTP is triggered here; registration and
    /// authentication are decoupled.
    pub async fn register(&self, name: &str, email: &str, phone: &str) -> DomainResult<User> {
        for (field, value) in [("name", name), ("email", email), ("phone", phone)] {
            if !not_empty(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if !is_valid_phone(phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone(phone),
            }
            .into());
        }

        if self
            .user_repository
            .find_by_contact(email, phone)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = User::new(name.to_string(), email.to_string(), phone.to_string());

        // The repository enforces uniqueness atomically; a concurrent
        // duplicate loses here even though the lookup above passed.
        let created = self.user_repository.create(user).await?;

        info!(
            user_id = %created.id,
            phone = %mask_phone(&created.phone),
            "registered new user"
        );

        Ok(created)
    }

    /// Initiate login: dispatch a one-time code to a registered phone
    ///
    /// OTP is only sendable to phones that already own a registered profile;
    /// the lookup doubles as the existence check.
    pub async fn send_login_code(&self, phone: &str) -> DomainResult<()> {
        if !is_valid_phone(phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone(phone),
            }
            .into());
        }

        if self.user_repository.find_by_phone(phone).await?.is_none() {
            return Err(AuthError::UserNotFound.into());
        }

        match self.otp_provider.request_code(phone).await {
            Ok(dispatch_id) => {
                info!(
                    phone = %mask_phone(phone),
                    dispatch_id = %dispatch_id,
                    "verification code dispatched"
                );
                Ok(())
            }
            Err(message) => {
                warn!(
                    phone = %mask_phone(phone),
                    error = %message,
                    "verification code dispatch failed"
                );
                Err(AuthError::OtpDispatchFailed { message }.into())
            }
        }
    }

    /// Complete login: check the code with the provider and mint a session
    /// token
    ///
    /// This is the only path that produces a session token.
    pub async fn verify_login_code(&self, phone: &str, code: &str) -> DomainResult<String> {
        for (field, value) in [("phone", phone), ("code", code)] {
            if !not_empty(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        let check = self
            .otp_provider
            .check_code(phone, code)
            .await
            .map_err(|message| {
                warn!(
                    phone = %mask_phone(phone),
                    error = %message,
                    "provider-side code check failed"
                );
                DomainError::Auth(AuthError::OtpVerificationFailed { message })
            })?;

        if !check.is_approved() {
            warn!(phone = %mask_phone(phone), "code denied by provider");
            return Err(AuthError::InvalidOtp.into());
        }

        // Initiation required the user to exist; absence here means the
        // record vanished between the two calls.
        let user = self
            .user_repository
            .find_by_phone(phone)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let token = self.token_service.issue_session_token(user.id)?;

        info!(user_id = %user.id, "session token issued");

        Ok(token)
    }

    /// Resolve a bearer token from an Authorization header into a profile
    ///
    /// Every verification failure (missing header, wrong scheme, bad
    /// signature, malformed payload, expiry, unknown subject) collapses into
    /// `Unauthorized` so callers cannot distinguish them. Repository I/O
    /// failures are not verification outcomes and propagate as-is.
    pub async fn resolve_session(
        &self,
        authorization: Option<&str>,
    ) -> DomainResult<UserProfile> {
        let token = authorization
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or(DomainError::Unauthorized)?;

        let claims = self
            .token_service
            .verify_session_token(token)
            .map_err(|_| DomainError::Unauthorized)?;

        let user_id = claims.user_id().map_err(|_| DomainError::Unauthorized)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        Ok(UserProfile::from(user))
    }
}
