use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

use vt_api::app::create_app;
use vt_api::config::Config;
use vt_api::routes::AppState;
use vt_core::repositories::UserRepository;
use vt_core::services::auth::AuthService;
use vt_core::services::token::TokenService;
use vt_core::services::verification::{MockOtpProvider, OtpProvider};
use vt_infra::database::{create_pool, MySqlUserRepository};
use vt_infra::otp::{TwilioVerifyConfig, TwilioVerifyProvider};
use vt_shared::config::OtpProviderKind;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting VeriTel API server");

    // Load configuration; a missing signing secret aborts startup
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Database connection pool
    let pool = match create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    let user_repository = Arc::new(MySqlUserRepository::new(pool));

    // Session token codec
    let token_service = Arc::new(TokenService::new(config.jwt.clone().into()));

    // OTP provider selection; the mock never delivers real codes
    match config.otp.provider {
        OtpProviderKind::Twilio => {
            let provider_config = match TwilioVerifyConfig::from_otp_config(&config.otp) {
                Ok(provider_config) => provider_config,
                Err(e) => {
                    error!("Configuration error: {}", e);
                    std::process::exit(1);
                }
            };
            let provider = match TwilioVerifyProvider::new(provider_config) {
                Ok(provider) => Arc::new(provider),
                Err(e) => {
                    error!("Failed to initialize Twilio Verify provider: {}", e);
                    std::process::exit(1);
                }
            };
            serve(user_repository, provider, token_service, config).await
        }
        OtpProviderKind::Mock => {
            warn!("Using mock OTP provider; verification codes are not delivered");
            let provider = Arc::new(MockOtpProvider::new());
            serve(user_repository, provider, token_service, config).await
        }
    }
}

/// Wire the service graph and run the HTTP server
async fn serve<U, P>(
    user_repository: Arc<U>,
    otp_provider: Arc<P>,
    token_service: Arc<TokenService>,
    config: Config,
) -> std::io::Result<()>
where
    U: UserRepository + 'static,
    P: OtpProvider + 'static,
{
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        otp_provider,
        token_service,
    ));
    let state = web::Data::new(AppState { auth_service });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let cors_config = config.cors.clone();
    HttpServer::new(move || create_app(state.clone(), &cors_config))
        .bind(&bind_address)?
        .run()
        .await
}
