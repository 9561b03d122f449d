//! Contact info and contact form message operations.

use super::{degrade_list, degrade_opt, AppState};
use crate::contact::models::{
    ContactInfo, ContactMessage, MessageStatus, SendMessageRequest, UpsertContactInfoRequest,
};

const MESSAGE_COLUMNS: &str =
    "id, name, email, phone, project_type, message, status, created_at, updated_at";
const INFO_COLUMNS: &str = "id, address, phone, email, map_lat, map_lng, facebook, instagram, \
                            twitter, youtube, linkedin, updated_at";

impl AppState {
    /// Newest messages first, optionally narrowed to one status.
    pub async fn get_contact_messages(&self, status: Option<MessageStatus>) -> Vec<ContactMessage> {
        let result = match status {
            Some(status) => {
                let sql = format!(
                    "SELECT {MESSAGE_COLUMNS} FROM contact_messages \
                     WHERE status = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ContactMessage>(&sql)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "SELECT {MESSAGE_COLUMNS} FROM contact_messages ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ContactMessage>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        };
        degrade_list(result, "contact messages")
    }

    pub async fn create_contact_message(
        &self,
        req: &SendMessageRequest,
    ) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO contact_messages (name, email, phone, project_type, message) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(req.name.as_str())
        .bind(req.email.as_str())
        .bind(req.phone.as_deref())
        .bind(req.project_type)
        .bind(req.message.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_contact_message_status(
        &self,
        id: i32,
        status: MessageStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE contact_messages SET status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_contact_message(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn get_contact_info(&self) -> Option<ContactInfo> {
        let sql = format!("SELECT {INFO_COLUMNS} FROM contact_info LIMIT 1");
        let result = sqlx::query_as::<_, ContactInfo>(&sql)
            .fetch_optional(&self.pool)
            .await;
        degrade_opt(result, "contact info")
    }

    /// Singleton upsert: update the existing row in place, insert the first
    /// time the admin saves.
    pub async fn upsert_contact_info(
        &self,
        req: &UpsertContactInfoRequest,
    ) -> Result<(), sqlx::Error> {
        let existing_id =
            sqlx::query_scalar::<_, i32>("SELECT id FROM contact_info LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;

        match existing_id {
            Some(id) => {
                sqlx::query(
                    "UPDATE contact_info SET address = $1, phone = $2, email = $3, map_lat = $4, \
                     map_lng = $5, facebook = $6, instagram = $7, twitter = $8, youtube = $9, \
                     linkedin = $10, updated_at = NOW() WHERE id = $11",
                )
                .bind(req.address.as_deref())
                .bind(req.phone.as_deref())
                .bind(req.email.as_deref())
                .bind(req.map_lat.as_deref())
                .bind(req.map_lng.as_deref())
                .bind(req.facebook.as_deref())
                .bind(req.instagram.as_deref())
                .bind(req.twitter.as_deref())
                .bind(req.youtube.as_deref())
                .bind(req.linkedin.as_deref())
                .bind(id)
                .execute(&self.pool)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO contact_info (address, phone, email, map_lat, map_lng, facebook, \
                     instagram, twitter, youtube, linkedin) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
                )
                .bind(req.address.as_deref())
                .bind(req.phone.as_deref())
                .bind(req.email.as_deref())
                .bind(req.map_lat.as_deref())
                .bind(req.map_lng.as_deref())
                .bind(req.facebook.as_deref())
                .bind(req.instagram.as_deref())
                .bind(req.twitter.as_deref())
                .bind(req.youtube.as_deref())
                .bind(req.linkedin.as_deref())
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }
}
