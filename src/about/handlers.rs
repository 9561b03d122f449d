use actix_web::{web, HttpRequest, HttpResponse};

use crate::about::models::{
    AboutContent, Achievement, CompanyValue, CreateAchievementRequest, CreatePartnerRequest,
    CreateValueRequest, Partner, UpdateAchievementRequest, UpdatePartnerRequest,
    UpdateValueRequest, UpsertAboutContentRequest,
};
use crate::auth::middleware::require_admin;
use crate::db::AppState;
use crate::error::ApiError;
use crate::validation::{validate_required, ValidationErrors};
use crate::{CreatedResponse, SuccessResponse};

#[utoipa::path(
    get,
    path = "/api/about/content",
    tag = "About",
    responses(
        (status = 200, description = "About page sections", body = [AboutContent])
    )
)]
pub async fn get_about_content(state: web::Data<AppState>) -> HttpResponse {
    let content = state.get_about_content().await;
    HttpResponse::Ok().json(content)
}

/// Saving all sections from the admin panel issues one call per section;
/// each upsert is independent and retry-safe.
#[utoipa::path(
    put,
    path = "/api/about/content",
    tag = "About",
    request_body = UpsertAboutContentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Section saved", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn upsert_about_content(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<UpsertAboutContentRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.upsert_about_content(&body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/about/values",
    tag = "About",
    responses(
        (status = 200, description = "Company values", body = [CompanyValue])
    )
)]
pub async fn list_values(state: web::Data<AppState>) -> HttpResponse {
    let values = state.get_company_values().await;
    HttpResponse::Ok().json(values)
}

#[utoipa::path(
    post,
    path = "/api/about/values",
    tag = "About",
    request_body = CreateValueRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Value created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_value(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateValueRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.title, "title", &mut errors);
    errors.into_result()?;

    let id = state.create_company_value(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/about/values/{id}",
    tag = "About",
    params(("id" = i32, Path, description = "Value ID")),
    request_body = UpdateValueRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Value updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_value(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateValueRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.update_company_value(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/about/values/{id}",
    tag = "About",
    params(("id" = i32, Path, description = "Value ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Value deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_value(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_company_value(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/about/achievements",
    tag = "About",
    responses(
        (status = 200, description = "Achievements timeline, newest year first", body = [Achievement])
    )
)]
pub async fn list_achievements(state: web::Data<AppState>) -> HttpResponse {
    let achievements = state.get_achievements().await;
    HttpResponse::Ok().json(achievements)
}

#[utoipa::path(
    post,
    path = "/api/about/achievements",
    tag = "About",
    request_body = CreateAchievementRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Achievement created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_achievement(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateAchievementRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.title, "title", &mut errors);
    errors.into_result()?;

    let id = state.create_achievement(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/about/achievements/{id}",
    tag = "About",
    params(("id" = i32, Path, description = "Achievement ID")),
    request_body = UpdateAchievementRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Achievement updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_achievement(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateAchievementRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.update_achievement(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/about/achievements/{id}",
    tag = "About",
    params(("id" = i32, Path, description = "Achievement ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Achievement deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_achievement(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_achievement(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/about/partners",
    tag = "About",
    responses(
        (status = 200, description = "Active partners", body = [Partner])
    )
)]
pub async fn list_partners(state: web::Data<AppState>) -> HttpResponse {
    let partners = state.get_partners().await;
    HttpResponse::Ok().json(partners)
}

#[utoipa::path(
    get,
    path = "/api/about/partners/all",
    tag = "About",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All partners including inactive", body = [Partner]),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn list_all_partners(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    let partners = state.get_all_partners().await;
    Ok(HttpResponse::Ok().json(partners))
}

#[utoipa::path(
    post,
    path = "/api/about/partners",
    tag = "About",
    request_body = CreatePartnerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Partner created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_partner(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreatePartnerRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.name, "name", &mut errors);
    errors.into_result()?;

    let id = state.create_partner(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/about/partners/{id}",
    tag = "About",
    params(("id" = i32, Path, description = "Partner ID")),
    request_body = UpdatePartnerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Partner updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_partner(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePartnerRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.update_partner(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/about/partners/{id}",
    tag = "About",
    params(("id" = i32, Path, description = "Partner ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Partner deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_partner(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_partner(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/about")
            .service(
                web::resource("/content")
                    .route(web::get().to(get_about_content))
                    .route(web::put().to(upsert_about_content)),
            )
            .service(
                web::resource("/values")
                    .route(web::get().to(list_values))
                    .route(web::post().to(create_value)),
            )
            .service(
                web::resource("/values/{id}")
                    .route(web::put().to(update_value))
                    .route(web::delete().to(delete_value)),
            )
            .service(
                web::resource("/achievements")
                    .route(web::get().to(list_achievements))
                    .route(web::post().to(create_achievement)),
            )
            .service(
                web::resource("/achievements/{id}")
                    .route(web::put().to(update_achievement))
                    .route(web::delete().to(delete_achievement)),
            )
            .service(web::resource("/partners/all").route(web::get().to(list_all_partners)))
            .service(
                web::resource("/partners")
                    .route(web::get().to(list_partners))
                    .route(web::post().to(create_partner)),
            )
            .service(
                web::resource("/partners/{id}")
                    .route(web::put().to(update_partner))
                    .route(web::delete().to(delete_partner)),
            ),
    );
}
