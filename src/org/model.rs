use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the organization chart. `parent_id` points at another
/// position's id; null marks a root. The store does not enforce the
/// reference, so a parent may be missing after deletions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct OrgPosition {
    pub id: i32,
    #[schema(example = "Genel Yapımcı")]
    pub title: String,
    pub name: Option<String>,
    pub department: Option<String>,
    pub parent_id: Option<i32>,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A position with its direct reports, as rendered by the org chart page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrgNode {
    pub id: i32,
    pub title: String,
    pub name: Option<String>,
    pub department: Option<String>,
    pub parent_id: Option<i32>,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<OrgNode>,
}

impl From<OrgPosition> for OrgNode {
    fn from(position: OrgPosition) -> Self {
        Self {
            id: position.id,
            title: position.title,
            name: position.name,
            department: position.department,
            parent_id: position.parent_id,
            photo: position.photo,
            bio: position.bio,
            sort_order: position.sort_order,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePositionRequest {
    #[schema(example = "İdari Yapımcı")]
    pub title: String,
    pub name: Option<String>,
    pub department: Option<String>,
    pub parent_id: Option<i32>,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub sort_order: Option<i32>,
}

/// Partial update; re-parenting moves the position within the forest.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePositionRequest {
    pub title: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub parent_id: Option<i32>,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub sort_order: Option<i32>,
}
