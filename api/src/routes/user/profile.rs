//! Handler for GET /api/user

use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest, HttpResponse};

use vt_core::repositories::UserRepository;
use vt_core::services::verification::OtpProvider;

use crate::dto::user::UserProfileResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Resolve the bearer token into the caller's profile
///
/// Every verification failure is an undifferentiated 401; the distinction
/// between missing header, bad signature and expiry never reaches the
/// caller.
pub async fn profile<U, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: OtpProvider + 'static,
{
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.auth_service.resolve_session(authorization).await {
        Ok(profile) => HttpResponse::Ok().json(UserProfileResponse::from(profile)),
        Err(error) => domain_error_response(&error),
    }
}
