use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::middleware::require_admin;
use crate::db::AppState;
use crate::error::ApiError;
use crate::settings::models::{SetSettingRequest, SiteSetting};
use crate::SuccessResponse;

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "All site settings", body = [SiteSetting])
    )
)]
pub async fn list_settings(state: web::Data<AppState>) -> HttpResponse {
    let settings = state.get_site_settings().await;
    HttpResponse::Ok().json(settings)
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    tag = "Settings",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Setting value", body = String),
        (status = 404, description = "Setting not found", body = crate::ErrorResponse)
    )
)]
pub async fn get_setting(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match state.get_site_setting(&path.into_inner()).await {
        Some(value) => Ok(HttpResponse::Ok().json(value)),
        None => Err(ApiError::NotFound("Setting")),
    }
}

#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    tag = "Settings",
    params(("key" = String, Path, description = "Setting key")),
    request_body = SetSettingRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Setting saved", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn set_setting(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SetSettingRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state
        .upsert_site_setting(&path.into_inner(), &body.value)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .service(web::resource("").route(web::get().to(list_settings)))
            .service(
                web::resource("/{key}")
                    .route(web::get().to(get_setting))
                    .route(web::put().to(set_setting)),
            ),
    );
}
