use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;

/// Portfolio categories. Closed set; values outside it are rejected at the
/// deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_category", rename_all = "snake_case")]
pub enum ProjectCategory {
    Film,
    Reklam,
    Belgesel,
    MuzikVideo,
}

/// Publication state. Only `active` projects are publicly visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    ComingSoon,
    Draft,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Project {
    pub id: i32,
    #[schema(example = "Kuru Otlar Üstüne")]
    pub title: String,
    #[schema(example = "kuru-otlar-ustune")]
    pub slug: String,
    pub category: ProjectCategory,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub thumbnail: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub gallery: Option<Json<Vec<String>>>,
    pub video_url: Option<String>,
    pub director: Option<String>,
    pub camera: Option<String>,
    pub duration: Option<String>,
    pub year: Option<i32>,
    pub crew: Option<String>,
    pub status: ProjectStatus,
    pub sort_order: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "Yeni Film")]
    pub title: String,
    #[schema(example = "yeni-film")]
    pub slug: String,
    pub category: ProjectCategory,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub thumbnail: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub director: Option<String>,
    pub camera: Option<String>,
    pub duration: Option<String>,
    pub year: Option<i32>,
    pub crew: Option<String>,
    pub status: Option<ProjectStatus>,
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}

/// Partial update. Absent fields are left unchanged, never nulled out.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<ProjectCategory>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub thumbnail: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub director: Option<String>,
    pub camera: Option<String>,
    pub duration: Option<String>,
    pub year: Option<i32>,
    pub crew: Option<String>,
    pub status: Option<ProjectStatus>,
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListProjectsQuery {
    /// Restrict the listing to a single publication state.
    pub status: Option<ProjectStatus>,
}
