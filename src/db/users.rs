//! Account operations for the auth flow.

use super::{degrade_opt, AppState};
use crate::auth::model::User;

const COLUMNS: &str = "id, open_id, name, email, login_method, password_hash, refresh_token, \
                       role, created_at, updated_at, last_signed_in";

impl AppState {
    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await;
        degrade_opt(result, "user by email")
    }

    pub async fn get_user_by_refresh_token(&self, refresh_token: &str) -> Option<User> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE refresh_token = $1");
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(refresh_token)
            .fetch_optional(&self.pool)
            .await;
        degrade_opt(result, "user by refresh token")
    }

    /// Store or clear a user's refresh token. Storing a new one invalidates
    /// any previous session; clearing logs the user out.
    pub async fn update_user_refresh_token(
        &self,
        user_id: i32,
        refresh_token: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET refresh_token = $1, updated_at = NOW() WHERE id = $2")
            .bind(refresh_token)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn touch_last_signed_in(&self, user_id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_signed_in = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
