//! Tests for the session token codec

use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service_with_secret(secret: &str) -> TokenService {
    TokenService::new(TokenServiceConfig::new(secret))
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = service_with_secret("test-secret");
    let user_id = Uuid::new_v4();

    let token = service.issue_session_token(user_id).unwrap();
    let claims = service.verify_session_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[test]
fn test_expired_token_is_rejected() {
    let config = TokenServiceConfig::new("test-secret").with_session_ttl_hours(-1);
    let service = TokenService::new(config);

    let token = service.issue_session_token(Uuid::new_v4()).unwrap();
    let result = service.verify_session_token(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_tampered_signature_is_rejected() {
    let service = service_with_secret("test-secret");
    let token = service.issue_session_token(Uuid::new_v4()).unwrap();

    // Flip a character in the signature segment
    let signature_start = token.rfind('.').unwrap() + 1;
    let mut tampered = token[..signature_start].to_string();
    let signature = &token[signature_start..];
    let flipped = if signature.starts_with('A') { 'B' } else { 'A' };
    tampered.push(flipped);
    tampered.push_str(&signature[1..]);

    assert!(service.verify_session_token(&tampered).is_err());
}

#[test]
fn test_foreign_secret_token_is_rejected() {
    let issuer = service_with_secret("secret-one");
    let verifier = service_with_secret("secret-two");

    let token = issuer.issue_session_token(Uuid::new_v4()).unwrap();
    let result = verifier.verify_session_token(&token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_malformed_token_is_rejected() {
    let service = service_with_secret("test-secret");

    for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d"] {
        let result = service.verify_session_token(garbage);
        assert!(result.is_err(), "expected rejection for {:?}", garbage);
    }
}
