use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod about;
pub mod auth;
pub mod coming_soon;
pub mod contact;
pub mod db;
pub mod error;
pub mod org;
pub mod projects;
pub mod settings;
pub mod team;
pub mod validation;

pub use crate::db::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

/// Result body of update and delete mutations.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result body of create mutations, carrying the store-assigned id.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i32,
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = ErrorResponse::bad_request(&err.to_string());
    actix_web::error::InternalError::from_response(
        err,
        actix_web::HttpResponse::BadRequest().json(body),
    )
    .into()
}

fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = ErrorResponse::bad_request(&err.to_string());
    actix_web::error::InternalError::from_response(
        err,
        actix_web::HttpResponse::BadRequest().json(body),
    )
    .into()
}

fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = ErrorResponse::bad_request(&err.to_string());
    actix_web::error::InternalError::from_response(
        err,
        actix_web::HttpResponse::BadRequest().json(body),
    )
    .into()
}

/// Register extractor configs and the full `/api` surface. Shared between
/// `run` and the handler tests.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .configure(auth::handlers::config)
                .configure(projects::handlers::config)
                .configure(coming_soon::handlers::config)
                .configure(team::handlers::config)
                .configure(org::handlers::config)
                .configure(about::handlers::config)
                .configure(contact::handlers::config)
                .configure(settings::handlers::config),
        );
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    struct SecurityAddon;
    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            if let Some(components) = openapi.components.as_mut() {
                components.add_security_scheme(
                    "bearer_auth",
                    SecurityScheme::Http(
                        HttpBuilder::new()
                            .scheme(HttpAuthScheme::Bearer)
                            .bearer_format("JWT")
                            .build(),
                    ),
                );
            }
        }
    }

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::auth::handlers::login,
            crate::auth::handlers::refresh_token,
            crate::auth::handlers::me,
            crate::auth::handlers::logout,
            crate::projects::handlers::list_projects,
            crate::projects::handlers::get_projects_by_category,
            crate::projects::handlers::get_featured_projects,
            crate::projects::handlers::get_project_by_slug,
            crate::projects::handlers::get_project_by_id,
            crate::projects::handlers::create_project,
            crate::projects::handlers::update_project,
            crate::projects::handlers::delete_project,
            crate::coming_soon::handlers::list_coming_soon,
            crate::coming_soon::handlers::list_all_coming_soon,
            crate::coming_soon::handlers::create_coming_soon,
            crate::coming_soon::handlers::update_coming_soon,
            crate::coming_soon::handlers::delete_coming_soon,
            crate::coming_soon::handlers::subscribe,
            crate::coming_soon::handlers::list_subscribers,
            crate::team::handlers::list_team,
            crate::team::handlers::list_all_team,
            crate::team::handlers::create_team_member,
            crate::team::handlers::update_team_member,
            crate::team::handlers::delete_team_member,
            crate::org::handlers::list_positions,
            crate::org::handlers::get_org_tree,
            crate::org::handlers::create_position,
            crate::org::handlers::update_position,
            crate::org::handlers::delete_position,
            crate::about::handlers::get_about_content,
            crate::about::handlers::upsert_about_content,
            crate::about::handlers::list_values,
            crate::about::handlers::create_value,
            crate::about::handlers::update_value,
            crate::about::handlers::delete_value,
            crate::about::handlers::list_achievements,
            crate::about::handlers::create_achievement,
            crate::about::handlers::update_achievement,
            crate::about::handlers::delete_achievement,
            crate::about::handlers::list_partners,
            crate::about::handlers::list_all_partners,
            crate::about::handlers::create_partner,
            crate::about::handlers::update_partner,
            crate::about::handlers::delete_partner,
            crate::contact::handlers::get_contact_info,
            crate::contact::handlers::upsert_contact_info,
            crate::contact::handlers::list_messages,
            crate::contact::handlers::send_message,
            crate::contact::handlers::update_message_status,
            crate::contact::handlers::delete_message,
            crate::settings::handlers::list_settings,
            crate::settings::handlers::get_setting,
            crate::settings::handlers::set_setting
        ),
        components(
            schemas(
                ErrorResponse,
                SuccessResponse,
                CreatedResponse,
                auth::model::Role,
                auth::model::AuthUser,
                auth::model::LoginRequest,
                auth::model::TokenResponse,
                auth::model::RefreshRequest,
                projects::models::Project,
                projects::models::ProjectCategory,
                projects::models::ProjectStatus,
                projects::models::CreateProjectRequest,
                projects::models::UpdateProjectRequest,
                coming_soon::models::ComingSoonProject,
                coming_soon::models::CreateComingSoonRequest,
                coming_soon::models::UpdateComingSoonRequest,
                coming_soon::models::SubscribeRequest,
                coming_soon::models::EmailSubscriber,
                team::models::TeamMember,
                team::models::TeamDepartment,
                team::models::CreateTeamMemberRequest,
                team::models::UpdateTeamMemberRequest,
                org::model::OrgPosition,
                org::model::OrgNode,
                org::model::CreatePositionRequest,
                org::model::UpdatePositionRequest,
                about::models::AboutContent,
                about::models::AboutSection,
                about::models::UpsertAboutContentRequest,
                about::models::CompanyValue,
                about::models::CreateValueRequest,
                about::models::UpdateValueRequest,
                about::models::Achievement,
                about::models::AchievementType,
                about::models::CreateAchievementRequest,
                about::models::UpdateAchievementRequest,
                about::models::Partner,
                about::models::CreatePartnerRequest,
                about::models::UpdatePartnerRequest,
                contact::models::ContactInfo,
                contact::models::ContactMessage,
                contact::models::ContactProjectType,
                contact::models::MessageStatus,
                contact::models::SendMessageRequest,
                contact::models::UpdateMessageStatusRequest,
                contact::models::UpsertContactInfoRequest,
                settings::models::SiteSetting,
                settings::models::SetSettingRequest
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "Authentication", description = "Admin login and session endpoints."),
            (name = "Projects", description = "Portfolio project endpoints."),
            (name = "Coming Soon", description = "Teaser projects and release subscriptions."),
            (name = "Team", description = "Team member endpoints."),
            (name = "Organization", description = "Organization chart endpoints."),
            (name = "About", description = "About page content, values, achievements, partners."),
            (name = "Contact", description = "Contact info and contact form messages."),
            (name = "Settings", description = "Site settings key/value store.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let app_state = match AppState::new().await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to connect to database. Please check your DATABASE_URL in .env and ensure the database is running. Error: {}", e);
            std::process::exit(1);
        }
    };

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
    log::info!("Starting server at http://{}", bind_addr);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let cors = Cors::default()
            .allowed_origin("https://zengafilm.com")
            .allowed_origin("https://www.zengafilm.com")
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .app_data(app_state)
            .configure(configure_api)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
