use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::middleware::require_admin;
use crate::coming_soon::models::{
    ComingSoonProject, CreateComingSoonRequest, EmailSubscriber, SubscribeRequest,
    UpdateComingSoonRequest,
};
use crate::db::AppState;
use crate::error::ApiError;
use crate::validation::{validate_email, validate_required, ValidationErrors};
use crate::{CreatedResponse, SuccessResponse};

#[utoipa::path(
    get,
    path = "/api/coming-soon",
    tag = "Coming Soon",
    responses(
        (status = 200, description = "Active coming-soon projects", body = [ComingSoonProject])
    )
)]
pub async fn list_coming_soon(state: web::Data<AppState>) -> HttpResponse {
    let projects = state.get_coming_soon_projects().await;
    HttpResponse::Ok().json(projects)
}

#[utoipa::path(
    get,
    path = "/api/coming-soon/all",
    tag = "Coming Soon",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All coming-soon projects", body = [ComingSoonProject]),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn list_all_coming_soon(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    let projects = state.get_all_coming_soon_projects().await;
    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    post,
    path = "/api/coming-soon",
    tag = "Coming Soon",
    request_body = CreateComingSoonRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Coming-soon project created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_coming_soon(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateComingSoonRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.title, "title", &mut errors);
    errors.into_result()?;

    let id = state.create_coming_soon_project(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/coming-soon/{id}",
    tag = "Coming Soon",
    params(("id" = i32, Path, description = "Coming-soon project ID")),
    request_body = UpdateComingSoonRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Coming-soon project updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_coming_soon(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateComingSoonRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state
        .update_coming_soon_project(path.into_inner(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/coming-soon/{id}",
    tag = "Coming Soon",
    params(("id" = i32, Path, description = "Coming-soon project ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Coming-soon project deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_coming_soon(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_coming_soon_project(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/api/coming-soon/subscribe",
    tag = "Coming Soon",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscribed", body = SuccessResponse),
        (status = 400, description = "Invalid email", body = crate::ErrorResponse)
    )
)]
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<SubscribeRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut errors = ValidationErrors::new();
    validate_email(&body.email, "email", &mut errors);
    errors.into_result()?;

    state.subscribe_email(body.email.trim()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/coming-soon/subscribers",
    tag = "Coming Soon",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active subscribers", body = [EmailSubscriber]),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn list_subscribers(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    let subscribers = state.get_all_subscribers().await;
    Ok(HttpResponse::Ok().json(subscribers))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/coming-soon")
            .service(
                web::resource("")
                    .route(web::get().to(list_coming_soon))
                    .route(web::post().to(create_coming_soon)),
            )
            .service(web::resource("/all").route(web::get().to(list_all_coming_soon)))
            .service(web::resource("/subscribe").route(web::post().to(subscribe)))
            .service(web::resource("/subscribers").route(web::get().to(list_subscribers)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_coming_soon))
                    .route(web::delete().to(delete_coming_soon)),
            ),
    );
}
