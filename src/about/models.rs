use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four narrative sections of the about page. One row per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "about_section", rename_all = "snake_case")]
pub enum AboutSection {
    Vision,
    Mission,
    Story,
    Values,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AboutContent {
    pub id: i32,
    pub section: AboutSection,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload: writes the section's row in place, creating it the first
/// time the admin saves.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertAboutContentRequest {
    pub section: AboutSection,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CompanyValue {
    pub id: i32,
    #[schema(example = "Dürüstlük")]
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateValueRequest {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateValueRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

/// Awards vs. company milestones on the achievements timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "achievement_type", rename_all = "snake_case")]
pub enum AchievementType {
    Award,
    Milestone,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Achievement {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: AchievementType,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAchievementRequest {
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: Option<AchievementType>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAchievementRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<AchievementType>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePartnerRequest {
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePartnerRequest {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
