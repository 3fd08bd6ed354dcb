//! HTTP route handlers

pub mod auth;
pub mod user;

use std::sync::Arc;

use vt_core::repositories::UserRepository;
use vt_core::services::auth::AuthService;
use vt_core::services::verification::OtpProvider;

/// Application state that holds shared services
pub struct AppState<U, P>
where
    U: UserRepository,
    P: OtpProvider,
{
    pub auth_service: Arc<AuthService<U, P>>,
}
