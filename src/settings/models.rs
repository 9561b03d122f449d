use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One key/value site setting (site name, social links, analytics id, ...).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct SiteSetting {
    pub id: i32,
    #[schema(example = "siteName")]
    pub setting_key: String,
    #[schema(example = "Zenga Film Prodüksiyon")]
    pub setting_value: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSettingRequest {
    pub value: String,
}
