//! Coming-soon project and email subscriber operations.

use sqlx::QueryBuilder;

use super::{degrade_list, AppState};
use crate::coming_soon::models::{
    ComingSoonProject, CreateComingSoonRequest, EmailSubscriber, UpdateComingSoonRequest,
};

const COLUMNS: &str = "id, title, teaser_image, teaser_video, description, release_date, \
                       is_active, sort_order, created_at, updated_at";

impl AppState {
    /// Active teasers for the public page.
    pub async fn get_coming_soon_projects(&self) -> Vec<ComingSoonProject> {
        let sql = format!(
            "SELECT {COLUMNS} FROM coming_soon_projects \
             WHERE is_active = TRUE ORDER BY sort_order ASC"
        );
        let result = sqlx::query_as::<_, ComingSoonProject>(&sql)
            .fetch_all(&self.pool)
            .await;
        degrade_list(result, "coming soon projects")
    }

    pub async fn get_all_coming_soon_projects(&self) -> Vec<ComingSoonProject> {
        let sql = format!("SELECT {COLUMNS} FROM coming_soon_projects ORDER BY sort_order ASC");
        let result = sqlx::query_as::<_, ComingSoonProject>(&sql)
            .fetch_all(&self.pool)
            .await;
        degrade_list(result, "all coming soon projects")
    }

    pub async fn create_coming_soon_project(
        &self,
        req: &CreateComingSoonRequest,
    ) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO coming_soon_projects (title, teaser_image, teaser_video, description, \
             release_date, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), COALESCE($7, 0)) \
             RETURNING id",
        )
        .bind(req.title.as_str())
        .bind(req.teaser_image.as_deref())
        .bind(req.teaser_video.as_deref())
        .bind(req.description.as_deref())
        .bind(req.release_date)
        .bind(req.is_active)
        .bind(req.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_coming_soon_project(
        &self,
        id: i32,
        patch: &UpdateComingSoonRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE coming_soon_projects SET updated_at = NOW()");
        if let Some(title) = &patch.title {
            qb.push(", title = ").push_bind(title.as_str());
        }
        if let Some(teaser_image) = &patch.teaser_image {
            qb.push(", teaser_image = ").push_bind(teaser_image.as_str());
        }
        if let Some(teaser_video) = &patch.teaser_video {
            qb.push(", teaser_video = ").push_bind(teaser_video.as_str());
        }
        if let Some(description) = &patch.description {
            qb.push(", description = ").push_bind(description.as_str());
        }
        if let Some(release_date) = patch.release_date {
            qb.push(", release_date = ").push_bind(release_date);
        }
        if let Some(is_active) = patch.is_active {
            qb.push(", is_active = ").push_bind(is_active);
        }
        if let Some(sort_order) = patch.sort_order {
            qb.push(", sort_order = ").push_bind(sort_order);
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    pub async fn delete_coming_soon_project(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM coming_soon_projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Subscribe an email for release notifications. Re-subscribing an
    /// address that opted out reactivates it.
    pub async fn subscribe_email(&self, email: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO email_subscribers (email) VALUES ($1) \
             ON CONFLICT (email) DO UPDATE SET is_active = TRUE",
        )
        .bind(email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_all_subscribers(&self) -> Vec<EmailSubscriber> {
        let result = sqlx::query_as::<_, EmailSubscriber>(
            "SELECT id, email, subscribed_at, is_active FROM email_subscribers \
             WHERE is_active = TRUE",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "email subscribers")
    }
}
