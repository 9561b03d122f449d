use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Teaser entry for the "Pek Yakında" page.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ComingSoonProject {
    pub id: i32,
    pub title: String,
    pub teaser_image: Option<String>,
    pub teaser_video: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateComingSoonRequest {
    pub title: String,
    pub teaser_image: Option<String>,
    pub teaser_video: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateComingSoonRequest {
    pub title: Option<String>,
    pub teaser_image: Option<String>,
    pub teaser_video: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Release-notification signup from the public page.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    #[schema(example = "seyirci@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EmailSubscriber {
    pub id: i32,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub is_active: bool,
}
