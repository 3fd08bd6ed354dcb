//! Handler for POST /api/login/send-otp

use actix_web::{web, HttpResponse};

use vt_core::repositories::UserRepository;
use vt_core::services::verification::OtpProvider;
use vt_shared::types::response::MessageResponse;

use crate::dto::auth::SendOtpRequest;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Dispatch a one-time code to a registered phone number
///
/// Responds 200 on dispatch, 400 for a malformed or absent phone, 404 when
/// the phone owns no registered profile, 500 on provider failure.
pub async fn send_otp<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: OtpProvider + 'static,
{
    let phone = request.phone.as_deref().unwrap_or("");

    match state.auth_service.send_login_code(phone).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("OTP sent successfully")),
        Err(error) => domain_error_response(&error),
    }
}
