//! Project table operations.

use sqlx::types::Json;
use sqlx::QueryBuilder;

use super::{degrade_list, degrade_opt, AppState};
use crate::projects::models::{
    CreateProjectRequest, Project, ProjectCategory, ProjectStatus, UpdateProjectRequest,
};

const COLUMNS: &str = "id, title, slug, category, short_description, full_description, \
                       thumbnail, gallery, video_url, director, camera, duration, year, crew, \
                       status, sort_order, is_featured, created_at, updated_at";

impl AppState {
    pub async fn get_all_projects(&self, status: Option<ProjectStatus>) -> Vec<Project> {
        let result = match status {
            Some(status) => {
                let sql = format!(
                    "SELECT {COLUMNS} FROM projects WHERE status = $1 ORDER BY sort_order ASC"
                );
                sqlx::query_as::<_, Project>(&sql)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!("SELECT {COLUMNS} FROM projects ORDER BY sort_order ASC");
                sqlx::query_as::<_, Project>(&sql).fetch_all(&self.pool).await
            }
        };
        degrade_list(result, "projects")
    }

    /// Publicly visible projects of one category.
    pub async fn get_projects_by_category(&self, category: ProjectCategory) -> Vec<Project> {
        let sql = format!(
            "SELECT {COLUMNS} FROM projects WHERE category = $1 AND status = 'active' \
             ORDER BY sort_order ASC"
        );
        let result = sqlx::query_as::<_, Project>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await;
        degrade_list(result, "projects by category")
    }

    /// Up to three featured active projects for the home page.
    pub async fn get_featured_projects(&self) -> Vec<Project> {
        let sql = format!(
            "SELECT {COLUMNS} FROM projects WHERE is_featured = TRUE AND status = 'active' \
             ORDER BY sort_order ASC LIMIT 3"
        );
        let result = sqlx::query_as::<_, Project>(&sql).fetch_all(&self.pool).await;
        degrade_list(result, "featured projects")
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        let sql = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        let result = sqlx::query_as::<_, Project>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await;
        degrade_opt(result, "project by slug")
    }

    pub async fn get_project_by_id(&self, id: i32) -> Option<Project> {
        let sql = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let result = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        degrade_opt(result, "project by id")
    }

    pub async fn create_project(&self, req: &CreateProjectRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO projects (title, slug, category, short_description, full_description, \
             thumbnail, gallery, video_url, director, camera, duration, year, crew, status, \
             sort_order, is_featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
             COALESCE($14, 'draft'), COALESCE($15, 0), COALESCE($16, FALSE)) \
             RETURNING id",
        )
        .bind(req.title.as_str())
        .bind(req.slug.as_str())
        .bind(req.category)
        .bind(req.short_description.as_deref())
        .bind(req.full_description.as_deref())
        .bind(req.thumbnail.as_deref())
        .bind(req.gallery.clone().map(Json))
        .bind(req.video_url.as_deref())
        .bind(req.director.as_deref())
        .bind(req.camera.as_deref())
        .bind(req.duration.as_deref())
        .bind(req.year)
        .bind(req.crew.as_deref())
        .bind(req.status)
        .bind(req.sort_order)
        .bind(req.is_featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Partial update; only the fields present in the patch are written.
    pub async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProjectRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE projects SET updated_at = NOW()");
        if let Some(title) = &patch.title {
            qb.push(", title = ").push_bind(title.as_str());
        }
        if let Some(slug) = &patch.slug {
            qb.push(", slug = ").push_bind(slug.as_str());
        }
        if let Some(category) = patch.category {
            qb.push(", category = ").push_bind(category);
        }
        if let Some(short_description) = &patch.short_description {
            qb.push(", short_description = ").push_bind(short_description.as_str());
        }
        if let Some(full_description) = &patch.full_description {
            qb.push(", full_description = ").push_bind(full_description.as_str());
        }
        if let Some(thumbnail) = &patch.thumbnail {
            qb.push(", thumbnail = ").push_bind(thumbnail.as_str());
        }
        if let Some(gallery) = &patch.gallery {
            qb.push(", gallery = ").push_bind(Json(gallery.clone()));
        }
        if let Some(video_url) = &patch.video_url {
            qb.push(", video_url = ").push_bind(video_url.as_str());
        }
        if let Some(director) = &patch.director {
            qb.push(", director = ").push_bind(director.as_str());
        }
        if let Some(camera) = &patch.camera {
            qb.push(", camera = ").push_bind(camera.as_str());
        }
        if let Some(duration) = &patch.duration {
            qb.push(", duration = ").push_bind(duration.as_str());
        }
        if let Some(year) = patch.year {
            qb.push(", year = ").push_bind(year);
        }
        if let Some(crew) = &patch.crew {
            qb.push(", crew = ").push_bind(crew.as_str());
        }
        if let Some(status) = patch.status {
            qb.push(", status = ").push_bind(status);
        }
        if let Some(sort_order) = patch.sort_order {
            qb.push(", sort_order = ").push_bind(sort_order);
        }
        if let Some(is_featured) = patch.is_featured {
            qb.push(", is_featured = ").push_bind(is_featured);
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    /// Idempotent: deleting a missing id deletes zero rows and succeeds.
    pub async fn delete_project(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
