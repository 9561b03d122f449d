use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::middleware::require_admin;
use crate::db::AppState;
use crate::error::ApiError;
use crate::team::models::{
    CreateTeamMemberRequest, ListTeamQuery, TeamMember, UpdateTeamMemberRequest,
};
use crate::validation::{validate_required, ValidationErrors};
use crate::{CreatedResponse, SuccessResponse};

#[utoipa::path(
    get,
    path = "/api/team",
    tag = "Team",
    params(ListTeamQuery),
    responses(
        (status = 200, description = "Active team members", body = [TeamMember])
    )
)]
pub async fn list_team(
    state: web::Data<AppState>,
    query: web::Query<ListTeamQuery>,
) -> HttpResponse {
    let members = state.get_team_members(query.department).await;
    HttpResponse::Ok().json(members)
}

#[utoipa::path(
    get,
    path = "/api/team/all",
    tag = "Team",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All team members including inactive", body = [TeamMember]),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn list_all_team(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    let members = state.get_all_team_members().await;
    Ok(HttpResponse::Ok().json(members))
}

#[utoipa::path(
    post,
    path = "/api/team",
    tag = "Team",
    request_body = CreateTeamMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Team member created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_team_member(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateTeamMemberRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.name, "name", &mut errors);
    validate_required(&body.position, "position", &mut errors);
    errors.into_result()?;

    let id = state.create_team_member(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/team/{id}",
    tag = "Team",
    params(("id" = i32, Path, description = "Team member ID")),
    request_body = UpdateTeamMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team member updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_team_member(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateTeamMemberRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.update_team_member(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/team/{id}",
    tag = "Team",
    params(("id" = i32, Path, description = "Team member ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team member deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_team_member(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_team_member(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/team")
            .service(
                web::resource("")
                    .route(web::get().to(list_team))
                    .route(web::post().to(create_team_member)),
            )
            .service(web::resource("/all").route(web::get().to(list_all_team)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_team_member))
                    .route(web::delete().to(delete_team_member)),
            ),
    );
}
