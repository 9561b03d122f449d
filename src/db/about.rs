//! About page content: narrative sections, company values, achievements,
//! and partner references.

use sqlx::QueryBuilder;

use super::{degrade_list, AppState};
use crate::about::models::{
    AboutContent, Achievement, CompanyValue, CreateAchievementRequest, CreatePartnerRequest,
    CreateValueRequest, Partner, UpdateAchievementRequest, UpdatePartnerRequest,
    UpdateValueRequest, UpsertAboutContentRequest,
};

impl AppState {
    pub async fn get_about_content(&self) -> Vec<AboutContent> {
        let result = sqlx::query_as::<_, AboutContent>(
            "SELECT id, section, title, content, image, updated_at FROM about_content",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "about content")
    }

    /// One row per section; saving the same section twice updates in place.
    pub async fn upsert_about_content(
        &self,
        req: &UpsertAboutContentRequest,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO about_content (section, title, content, image) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (section) DO UPDATE \
             SET title = $2, content = $3, image = $4, updated_at = NOW()",
        )
        .bind(req.section)
        .bind(req.title.as_deref())
        .bind(req.content.as_deref())
        .bind(req.image.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_company_values(&self) -> Vec<CompanyValue> {
        let result = sqlx::query_as::<_, CompanyValue>(
            "SELECT id, title, description, icon, sort_order, created_at FROM company_values \
             ORDER BY sort_order ASC",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "company values")
    }

    pub async fn create_company_value(&self, req: &CreateValueRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO company_values (title, description, icon, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 0)) RETURNING id",
        )
        .bind(req.title.as_str())
        .bind(req.description.as_deref())
        .bind(req.icon.as_deref())
        .bind(req.sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_company_value(
        &self,
        id: i32,
        patch: &UpdateValueRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE company_values SET ");
        let mut any = false;
        if let Some(title) = &patch.title {
            qb.push("title = ").push_bind(title.as_str());
            any = true;
        }
        if let Some(description) = &patch.description {
            if any {
                qb.push(", ");
            }
            qb.push("description = ").push_bind(description.as_str());
            any = true;
        }
        if let Some(icon) = &patch.icon {
            if any {
                qb.push(", ");
            }
            qb.push("icon = ").push_bind(icon.as_str());
            any = true;
        }
        if let Some(sort_order) = patch.sort_order {
            if any {
                qb.push(", ");
            }
            qb.push("sort_order = ").push_bind(sort_order);
            any = true;
        }
        if !any {
            return Ok(());
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    pub async fn delete_company_value(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM company_values WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Timeline order: newest year first, sort_order within a year.
    pub async fn get_achievements(&self) -> Vec<Achievement> {
        let result = sqlx::query_as::<_, Achievement>(
            "SELECT id, title, description, year, type, sort_order, created_at FROM achievements \
             ORDER BY year DESC, sort_order ASC",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "achievements")
    }

    pub async fn create_achievement(
        &self,
        req: &CreateAchievementRequest,
    ) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO achievements (title, description, year, type, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 'milestone'), COALESCE($5, 0)) RETURNING id",
        )
        .bind(req.title.as_str())
        .bind(req.description.as_deref())
        .bind(req.year)
        .bind(req.kind)
        .bind(req.sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_achievement(
        &self,
        id: i32,
        patch: &UpdateAchievementRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE achievements SET ");
        let mut any = false;
        if let Some(title) = &patch.title {
            qb.push("title = ").push_bind(title.as_str());
            any = true;
        }
        if let Some(description) = &patch.description {
            if any {
                qb.push(", ");
            }
            qb.push("description = ").push_bind(description.as_str());
            any = true;
        }
        if let Some(year) = patch.year {
            if any {
                qb.push(", ");
            }
            qb.push("year = ").push_bind(year);
            any = true;
        }
        if let Some(kind) = patch.kind {
            if any {
                qb.push(", ");
            }
            qb.push("type = ").push_bind(kind);
            any = true;
        }
        if let Some(sort_order) = patch.sort_order {
            if any {
                qb.push(", ");
            }
            qb.push("sort_order = ").push_bind(sort_order);
            any = true;
        }
        if !any {
            return Ok(());
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    pub async fn delete_achievement(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Active partners for the public page.
    pub async fn get_partners(&self) -> Vec<Partner> {
        let result = sqlx::query_as::<_, Partner>(
            "SELECT id, name, logo, website, sort_order, is_active, created_at FROM partners \
             WHERE is_active = TRUE ORDER BY sort_order ASC",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "partners")
    }

    pub async fn get_all_partners(&self) -> Vec<Partner> {
        let result = sqlx::query_as::<_, Partner>(
            "SELECT id, name, logo, website, sort_order, is_active, created_at FROM partners \
             ORDER BY sort_order ASC",
        )
        .fetch_all(&self.pool)
        .await;
        degrade_list(result, "all partners")
    }

    pub async fn create_partner(&self, req: &CreatePartnerRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO partners (name, logo, website, sort_order, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE)) RETURNING id",
        )
        .bind(req.name.as_str())
        .bind(req.logo.as_deref())
        .bind(req.website.as_deref())
        .bind(req.sort_order)
        .bind(req.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_partner(
        &self,
        id: i32,
        patch: &UpdatePartnerRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE partners SET ");
        let mut any = false;
        if let Some(name) = &patch.name {
            qb.push("name = ").push_bind(name.as_str());
            any = true;
        }
        if let Some(logo) = &patch.logo {
            if any {
                qb.push(", ");
            }
            qb.push("logo = ").push_bind(logo.as_str());
            any = true;
        }
        if let Some(website) = &patch.website {
            if any {
                qb.push(", ");
            }
            qb.push("website = ").push_bind(website.as_str());
            any = true;
        }
        if let Some(sort_order) = patch.sort_order {
            if any {
                qb.push(", ");
            }
            qb.push("sort_order = ").push_bind(sort_order);
            any = true;
        }
        if let Some(is_active) = patch.is_active {
            if any {
                qb.push(", ");
            }
            qb.push("is_active = ").push_bind(is_active);
            any = true;
        }
        if !any {
            return Ok(());
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    pub async fn delete_partner(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM partners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
