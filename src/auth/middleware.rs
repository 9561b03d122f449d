use actix_web::HttpRequest;

use super::jwt::validate_token;
use super::model::{Claims, Role};
use crate::error::ApiError;

/// Extract token from Authorization header
fn extract_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(str::to_string))
}

/// Validate the bearer token on a request and return its claims.
pub fn validate_request_token(req: &HttpRequest) -> Result<Claims, ApiError> {
    let token = extract_token(req)
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization token".to_string()))?;

    let claims = validate_token(&token).map_err(|e| {
        log::warn!("Token validation failed: {:?}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    if claims.token_type != "access" {
        return Err(ApiError::Unauthorized("Invalid token type".to_string()));
    }

    Ok(claims)
}

/// Admin gate. Called first by every admin-only handler: validates the
/// token, then checks the role claim. Fails before any store access.
pub fn require_admin(req: &HttpRequest) -> Result<Claims, ApiError> {
    let claims = validate_request_token(req)?;
    if claims.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    Ok(claims)
}
