use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Departments the team page groups by. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "team_department", rename_all = "snake_case")]
pub enum TeamDepartment {
    Yonetim,
    Kreatif,
    Produksiyon,
    Teknik,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct TeamMember {
    pub id: i32,
    #[schema(example = "Emrah Göçen")]
    pub name: String,
    #[schema(example = "Yapım Sorumlusu")]
    pub position: String,
    pub department: TeamDepartment,
    pub photo: Option<String>,
    pub short_bio: Option<String>,
    pub full_bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub imdb_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub position: String,
    pub department: TeamDepartment,
    pub photo: Option<String>,
    pub short_bio: Option<String>,
    pub full_bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub imdb_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<TeamDepartment>,
    pub photo: Option<String>,
    pub short_bio: Option<String>,
    pub full_bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub imdb_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListTeamQuery {
    /// Restrict the listing to one department.
    pub department: Option<TeamDepartment>,
}
