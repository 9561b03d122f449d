use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::middleware::require_admin;
use crate::db::AppState;
use crate::error::ApiError;
use crate::org::model::{CreatePositionRequest, OrgNode, OrgPosition, UpdatePositionRequest};
use crate::org::tree::build_org_tree;
use crate::validation::{validate_required, ValidationErrors};
use crate::{CreatedResponse, SuccessResponse};

#[utoipa::path(
    get,
    path = "/api/org",
    tag = "Organization",
    responses(
        (status = 200, description = "Flat list of org positions", body = [OrgPosition])
    )
)]
pub async fn list_positions(state: web::Data<AppState>) -> HttpResponse {
    let positions = state.get_org_positions().await;
    HttpResponse::Ok().json(positions)
}

#[utoipa::path(
    get,
    path = "/api/org/tree",
    tag = "Organization",
    responses(
        (status = 200, description = "Org positions assembled into a forest", body = [OrgNode])
    )
)]
pub async fn get_org_tree(state: web::Data<AppState>) -> HttpResponse {
    let positions = state.get_org_positions().await;
    HttpResponse::Ok().json(build_org_tree(positions))
}

#[utoipa::path(
    post,
    path = "/api/org",
    tag = "Organization",
    request_body = CreatePositionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Position created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_position(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreatePositionRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.title, "title", &mut errors);
    errors.into_result()?;

    let id = state.create_org_position(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/org/{id}",
    tag = "Organization",
    params(("id" = i32, Path, description = "Position ID")),
    request_body = UpdatePositionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Position updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_position(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePositionRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.update_org_position(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/org/{id}",
    tag = "Organization",
    params(("id" = i32, Path, description = "Position ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Position deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_position(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_org_position(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/org")
            .service(
                web::resource("")
                    .route(web::get().to(list_positions))
                    .route(web::post().to(create_position)),
            )
            .service(web::resource("/tree").route(web::get().to(get_org_tree)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_position))
                    .route(web::delete().to(delete_position)),
            ),
    );
}
