//! Handler for POST /api/login/verify-otp

use actix_web::{web, HttpResponse};

use vt_core::repositories::UserRepository;
use vt_core::services::verification::OtpProvider;

use crate::dto::auth::{TokenResponse, VerifyOtpRequest};
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Check a one-time code and issue a session token
///
/// The only path that produces a session token. Responds 200 with `{token}`
/// on approval, 400 for missing fields or a denied code, 500 on provider
/// failure.
pub async fn verify_otp<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: OtpProvider + 'static,
{
    let phone = request.phone.as_deref().unwrap_or("");
    let code = request.code.as_deref().unwrap_or("");

    match state.auth_service.verify_login_code(phone, code).await {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => domain_error_response(&error),
    }
}
