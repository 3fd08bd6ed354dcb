//! Handler for POST /api/register

use actix_web::{web, HttpResponse};

use vt_core::repositories::UserRepository;
use vt_core::services::verification::OtpProvider;
use vt_shared::types::response::MessageResponse;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Register a new user by contact details
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alice",
///     "email": "alice@example.com",
///     "phone": "+14085551234"
/// }
/// ```
///
/// Responds 201 on success, 400 on validation failure, 409 when either
/// contact value is already registered. No token is issued here.
pub async fn register<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: OtpProvider + 'static,
{
    let name = request.name.as_deref().unwrap_or("");
    let email = request.email.as_deref().unwrap_or("");
    let phone = request.phone.as_deref().unwrap_or("");

    match state.auth_service.register(name, email, phone).await {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new("User registered successfully")),
        Err(error) => domain_error_response(&error),
    }
}
