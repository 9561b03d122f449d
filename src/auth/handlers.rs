use actix_web::{web, HttpRequest, HttpResponse};
use bcrypt::verify;

use super::jwt::{
    generate_access_token, generate_refresh_token, get_access_token_expiry, validate_token,
};
use super::middleware::validate_request_token;
use super::model::{AuthUser, LoginRequest, RefreshRequest, TokenResponse};
use crate::db::AppState;
use crate::error::ApiError;
use crate::validation::{validate_email, validate_required, ValidationErrors};
use crate::SuccessResponse;

/// Login endpoint
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = crate::ErrorResponse)
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut errors = ValidationErrors::new();
    validate_email(&body.email, "email", &mut errors);
    validate_required(&body.password, "password", &mut errors);
    errors.into_result()?;

    let user = state
        .get_user_by_email(&body.email)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let password_valid = user
        .password_hash
        .as_deref()
        .map(|hash| verify(&body.password, hash).unwrap_or(false))
        .unwrap_or(false);
    if !password_valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let user_id = user.id.to_string();
    let access_token = generate_access_token(&user_id, &body.email, user.role).map_err(|e| {
        log::error!("Failed to generate access token: {:?}", e);
        ApiError::Internal("Failed to generate token".to_string())
    })?;
    let refresh_token = generate_refresh_token(&user_id, &body.email, user.role).map_err(|e| {
        log::error!("Failed to generate refresh token: {:?}", e);
        ApiError::Internal("Failed to generate token".to_string())
    })?;

    // Single-device sessions: storing the new refresh token invalidates any
    // previous one.
    state
        .update_user_refresh_token(user.id, Some(&refresh_token))
        .await?;
    if let Err(e) = state.touch_last_signed_in(user.id).await {
        log::warn!("Failed to update last_signed_in: {:?}", e);
    }

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: get_access_token_expiry(),
    }))
}

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Token refreshed", body = TokenResponse),
        (status = 401, description = "Invalid refresh token", body = crate::ErrorResponse)
    )
)]
pub async fn refresh_token(
    state: web::Data<AppState>,
    body: web::Json<RefreshRequest>,
) -> Result<HttpResponse, ApiError> {
    let claims = validate_token(&body.refresh_token).map_err(|e| {
        log::warn!("Invalid refresh token: {:?}", e);
        ApiError::Unauthorized("Invalid or expired refresh token".to_string())
    })?;

    if claims.token_type != "refresh" {
        return Err(ApiError::Unauthorized("Invalid token type".to_string()));
    }

    // The token must also match the stored one (single device session).
    let user = state
        .get_user_by_refresh_token(&body.refresh_token)
        .await
        .ok_or_else(|| {
            ApiError::Unauthorized("Session expired. Please login again.".to_string())
        })?;

    let user_id = user.id.to_string();
    let email = user.email.clone().unwrap_or_default();
    let access_token = generate_access_token(&user_id, &email, user.role).map_err(|e| {
        log::error!("Failed to generate access token: {:?}", e);
        ApiError::Internal("Failed to generate token".to_string())
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        refresh_token: body.refresh_token.clone(),
        token_type: "Bearer".to_string(),
        expires_in: get_access_token_expiry(),
    }))
}

/// Echo the caller's identity from their access token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller identity", body = AuthUser),
        (status = 401, description = "Not authenticated", body = crate::ErrorResponse)
    )
)]
pub async fn me(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let claims = validate_request_token(&req)?;
    Ok(HttpResponse::Ok().json(AuthUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    }))
}

/// Clear the caller's stored refresh token, ending the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = SuccessResponse),
        (status = 401, description = "Not authenticated", body = crate::ErrorResponse)
    )
)]
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let claims = validate_request_token(&req)?;

    if let Ok(user_id) = claims.sub.parse::<i32>() {
        state.update_user_refresh_token(user_id, None).await?;
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// Configure auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/refresh", web::post().to(refresh_token))
            .route("/me", web::get().to(me))
            .route("/logout", web::post().to(logout)),
    );
}
