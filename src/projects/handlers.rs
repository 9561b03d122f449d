use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::middleware::require_admin;
use crate::db::AppState;
use crate::error::ApiError;
use crate::projects::models::{
    CreateProjectRequest, ListProjectsQuery, Project, ProjectCategory, UpdateProjectRequest,
};
use crate::validation::{validate_required, ValidationErrors};
use crate::{CreatedResponse, SuccessResponse};

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "List of projects", body = [Project])
    )
)]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ListProjectsQuery>,
) -> HttpResponse {
    let projects = state.get_all_projects(query.status).await;
    HttpResponse::Ok().json(projects)
}

#[utoipa::path(
    get,
    path = "/api/projects/category/{category}",
    tag = "Projects",
    params(("category" = ProjectCategory, Path, description = "Project category")),
    responses(
        (status = 200, description = "Active projects in the category", body = [Project])
    )
)]
pub async fn get_projects_by_category(
    state: web::Data<AppState>,
    path: web::Path<ProjectCategory>,
) -> HttpResponse {
    let projects = state.get_projects_by_category(path.into_inner()).await;
    HttpResponse::Ok().json(projects)
}

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "Projects",
    responses(
        (status = 200, description = "Featured projects for the home page", body = [Project])
    )
)]
pub async fn get_featured_projects(state: web::Data<AppState>) -> HttpResponse {
    let projects = state.get_featured_projects().await;
    HttpResponse::Ok().json(projects)
}

#[utoipa::path(
    get,
    path = "/api/projects/slug/{slug}",
    tag = "Projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, description = "Project not found", body = crate::ErrorResponse)
    )
)]
pub async fn get_project_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match state.get_project_by_slug(&path.into_inner()).await {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(ApiError::NotFound("Project")),
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, description = "Project not found", body = crate::ErrorResponse)
    )
)]
pub async fn get_project_by_id(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    match state.get_project_by_id(path.into_inner()).await {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(ApiError::NotFound("Project")),
    }
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Project created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn create_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;

    let mut errors = ValidationErrors::new();
    validate_required(&body.title, "title", &mut errors);
    validate_required(&body.slug, "slug", &mut errors);
    errors.into_result()?;

    let id = state.create_project(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.update_project(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i32, Path, description = "Project ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_project(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(list_projects))
                    .route(web::post().to(create_project)),
            )
            .service(web::resource("/featured").route(web::get().to(get_featured_projects)))
            .service(
                web::resource("/category/{category}")
                    .route(web::get().to(get_projects_by_category)),
            )
            .service(web::resource("/slug/{slug}").route(web::get().to(get_project_by_slug)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_project_by_id))
                    .route(web::put().to(update_project))
                    .route(web::delete().to(delete_project)),
            ),
    );
}
