//! Application factory
//!
//! Assembles middleware, routes and state into an actix-web App. Generic
//! over the collaborator implementations so integration tests can run the
//! full HTTP surface against in-memory doubles.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use vt_core::repositories::UserRepository;
use vt_core::services::verification::OtpProvider;
use vt_shared::config::CorsConfig;
use vt_shared::types::response::ErrorResponse;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{register, send_otp, verify_otp};
use crate::routes::user::profile;
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, P>(
    app_state: web::Data<AppState<U, P>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: OtpProvider + 'static,
{
    let cors = create_cors(cors_config);

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .route("/register", web::post().to(register::<U, P>))
                .service(
                    web::scope("/login")
                        .route("/send-otp", web::post().to(send_otp::<U, P>))
                        .route("/verify-otp", web::post().to(verify_otp::<U, P>)),
                )
                .route("/user", web::get().to(profile::<U, P>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "veritel-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
