use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Project type a visitor can pick on the contact form. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "contact_project_type", rename_all = "snake_case")]
pub enum ContactProjectType {
    Film,
    Reklam,
    Belgesel,
    MuzikVideo,
    Diger,
}

/// Message lifecycle: unread -> read -> replied, or archived at any point.
/// Monotonic in practice but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "message_status", rename_all = "snake_case")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
    Archived,
}

/// Contact form submission. Write-once from the public side; admins only
/// read, change status, or delete.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: Option<ContactProjectType>,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub name: String,
    #[schema(example = "izleyici@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub project_type: Option<ContactProjectType>,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMessageStatusRequest {
    pub status: MessageStatus,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListMessagesQuery {
    /// Restrict the listing to one status.
    pub status: Option<MessageStatus>,
}

/// Singleton contact/location record shown in the site footer and the
/// contact page.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ContactInfo {
    pub id: i32,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub map_lat: Option<String>,
    pub map_lng: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertContactInfoRequest {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub map_lat: Option<String>,
    pub map_lng: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}
