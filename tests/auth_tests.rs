//! Admin gate behavior: the role claim decides, and the gate fires before
//! anything else a handler does.

use actix_web::test::TestRequest;
use zenga_film_server::auth::jwt::{generate_access_token, generate_refresh_token};
use zenga_film_server::auth::middleware::{require_admin, validate_request_token};
use zenga_film_server::auth::model::Role;
use zenga_film_server::error::ApiError;

fn request_with_token(token: &str) -> actix_web::HttpRequest {
    TestRequest::default()
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_http_request()
}

#[test]
fn admin_token_passes_the_gate() {
    let token = generate_access_token("1", "admin@zengafilm.com", Role::Admin).unwrap();
    let req = request_with_token(&token);

    let claims = require_admin(&req).unwrap();
    assert_eq!(claims.sub, "1");
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn user_role_is_forbidden() {
    let token = generate_access_token("2", "user@example.com", Role::User).unwrap();
    let req = request_with_token(&token);

    let err = require_admin(&req).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden));
}

#[test]
fn missing_token_is_unauthorized() {
    let req = TestRequest::default().to_http_request();

    let err = require_admin(&req).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
fn garbage_token_is_unauthorized() {
    let req = request_with_token("definitely-not-a-jwt");

    let err = require_admin(&req).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
fn refresh_token_cannot_act_as_access_token() {
    let token = generate_refresh_token("1", "admin@zengafilm.com", Role::Admin).unwrap();
    let req = request_with_token(&token);

    let err = validate_request_token(&req).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
fn non_bearer_scheme_is_rejected() {
    let req = TestRequest::default()
        .insert_header(("Authorization", "Basic YWRtaW46YWRtaW4="))
        .to_http_request();

    let err = validate_request_token(&req).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
fn user_token_still_validates_as_identity() {
    // The gate rejects it, but `me` style identity echo accepts it.
    let token = generate_access_token("5", "user@example.com", Role::User).unwrap();
    let req = request_with_token(&token);

    let claims = validate_request_token(&req).unwrap();
    assert_eq!(claims.role, Role::User);
}
