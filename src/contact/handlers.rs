use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::middleware::require_admin;
use crate::contact::models::{
    ContactInfo, ContactMessage, ListMessagesQuery, SendMessageRequest,
    UpdateMessageStatusRequest, UpsertContactInfoRequest,
};
use crate::db::AppState;
use crate::error::ApiError;
use crate::validation::{validate_email, validate_required, ValidationErrors};
use crate::{CreatedResponse, SuccessResponse};

#[utoipa::path(
    get,
    path = "/api/contact/info",
    tag = "Contact",
    responses(
        (status = 200, description = "Contact info", body = ContactInfo),
        (status = 404, description = "Contact info not set yet", body = crate::ErrorResponse)
    )
)]
pub async fn get_contact_info(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    match state.get_contact_info().await {
        Some(info) => Ok(HttpResponse::Ok().json(info)),
        None => Err(ApiError::NotFound("Contact info")),
    }
}

#[utoipa::path(
    put,
    path = "/api/contact/info",
    tag = "Contact",
    request_body = UpsertContactInfoRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Contact info saved", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn upsert_contact_info(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<UpsertContactInfoRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.upsert_contact_info(&body).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/contact/messages",
    tag = "Contact",
    params(ListMessagesQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Contact form messages, newest first", body = [ContactMessage]),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn list_messages(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ListMessagesQuery>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    let messages = state.get_contact_messages(query.status).await;
    Ok(HttpResponse::Ok().json(messages))
}

/// Public contact form submission.
#[utoipa::path(
    post,
    path = "/api/contact/messages",
    tag = "Contact",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message received", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::ErrorResponse)
    )
)]
pub async fn send_message(
    state: web::Data<AppState>,
    body: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut errors = ValidationErrors::new();
    validate_required(&body.name, "name", &mut errors);
    validate_email(&body.email, "email", &mut errors);
    validate_required(&body.message, "message", &mut errors);
    errors.into_result()?;

    let id = state.create_contact_message(&body).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { success: true, id }))
}

#[utoipa::path(
    put,
    path = "/api/contact/messages/{id}/status",
    tag = "Contact",
    params(("id" = i32, Path, description = "Message ID")),
    request_body = UpdateMessageStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status updated", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn update_message_status(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateMessageStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state
        .update_contact_message_status(path.into_inner(), body.status)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/contact/messages/{id}",
    tag = "Contact",
    params(("id" = i32, Path, description = "Message ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Message deleted", body = SuccessResponse),
        (status = 403, description = "Admin access required", body = crate::ErrorResponse)
    )
)]
pub async fn delete_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req)?;
    state.delete_contact_message(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .service(
                web::resource("/info")
                    .route(web::get().to(get_contact_info))
                    .route(web::put().to(upsert_contact_info)),
            )
            .service(
                web::resource("/messages")
                    .route(web::get().to(list_messages))
                    .route(web::post().to(send_message)),
            )
            .service(
                web::resource("/messages/{id}/status")
                    .route(web::put().to(update_message_status)),
            )
            .service(web::resource("/messages/{id}").route(web::delete().to(delete_message))),
    );
}
