//! CORS middleware configuration for cross-origin requests.
//!
//! With no configured origins (development) the policy is permissive; when
//! `ALLOWED_ORIGINS` lists hosts, only those may call the API.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use vt_shared::config::CorsConfig;

/// Creates a CORS middleware instance for the given configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        log::info!("CORS: no allowed origins configured, allowing any origin");
        cors.allow_any_origin()
    } else {
        let mut cors = cors;
        for origin in &config.allowed_origins {
            log::info!("CORS: adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
        cors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_permissive_cors() {
        let _cors = create_cors(&CorsConfig::default());
    }

    #[test]
    fn test_create_restricted_cors() {
        let config = CorsConfig {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://app.veritel.io".to_string(),
            ],
        };
        let _cors = create_cors(&config);
    }
}
