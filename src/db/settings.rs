//! Site settings key/value operations.

use super::{degrade_list, degrade_opt, AppState};
use crate::settings::models::SiteSetting;

impl AppState {
    pub async fn get_site_settings(&self) -> Vec<SiteSetting> {
        let result = sqlx::query_as::<_, SiteSetting>(
            "SELECT id, setting_key, setting_value, updated_at FROM site_settings",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "site settings")
    }

    pub async fn get_site_setting(&self, key: &str) -> Option<String> {
        let result = sqlx::query_scalar::<_, Option<String>>(
            "SELECT setting_value FROM site_settings WHERE setting_key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await;
        degrade_opt(result, "site setting").flatten()
    }

    /// Keyed upsert: the ON CONFLICT arm keeps concurrent saves of the same
    /// key from both inserting.
    pub async fn upsert_site_setting(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO site_settings (setting_key, setting_value) VALUES ($1, $2) \
             ON CONFLICT (setting_key) DO UPDATE SET setting_value = $2, updated_at = NOW()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
