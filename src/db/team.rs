//! Team member table operations.

use sqlx::QueryBuilder;

use super::{degrade_list, AppState};
use crate::team::models::{
    CreateTeamMemberRequest, TeamDepartment, TeamMember, UpdateTeamMemberRequest,
};

const COLUMNS: &str = "id, name, position, department, photo, short_bio, full_bio, \
                       linkedin_url, imdb_url, sort_order, is_active, created_at, updated_at";

impl AppState {
    /// Publicly visible members, optionally narrowed to one department.
    pub async fn get_team_members(&self, department: Option<TeamDepartment>) -> Vec<TeamMember> {
        let result = match department {
            Some(department) => {
                let sql = format!(
                    "SELECT {COLUMNS} FROM team_members \
                     WHERE department = $1 AND is_active = TRUE ORDER BY sort_order ASC"
                );
                sqlx::query_as::<_, TeamMember>(&sql)
                    .bind(department)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "SELECT {COLUMNS} FROM team_members \
                     WHERE is_active = TRUE ORDER BY sort_order ASC"
                );
                sqlx::query_as::<_, TeamMember>(&sql).fetch_all(&self.pool).await
            }
        };
        degrade_list(result, "team members")
    }

    /// Every member including inactive ones, for the admin panel.
    pub async fn get_all_team_members(&self) -> Vec<TeamMember> {
        let sql = format!("SELECT {COLUMNS} FROM team_members ORDER BY sort_order ASC");
        let result = sqlx::query_as::<_, TeamMember>(&sql).fetch_all(&self.pool).await;
        degrade_list(result, "all team members")
    }

    pub async fn create_team_member(
        &self,
        req: &CreateTeamMemberRequest,
    ) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO team_members (name, position, department, photo, short_bio, full_bio, \
             linkedin_url, imdb_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 0), COALESCE($10, TRUE)) \
             RETURNING id",
        )
        .bind(req.name.as_str())
        .bind(req.position.as_str())
        .bind(req.department)
        .bind(req.photo.as_deref())
        .bind(req.short_bio.as_deref())
        .bind(req.full_bio.as_deref())
        .bind(req.linkedin_url.as_deref())
        .bind(req.imdb_url.as_deref())
        .bind(req.sort_order)
        .bind(req.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_team_member(
        &self,
        id: i32,
        patch: &UpdateTeamMemberRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE team_members SET updated_at = NOW()");
        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name.as_str());
        }
        if let Some(position) = &patch.position {
            qb.push(", position = ").push_bind(position.as_str());
        }
        if let Some(department) = patch.department {
            qb.push(", department = ").push_bind(department);
        }
        if let Some(photo) = &patch.photo {
            qb.push(", photo = ").push_bind(photo.as_str());
        }
        if let Some(short_bio) = &patch.short_bio {
            qb.push(", short_bio = ").push_bind(short_bio.as_str());
        }
        if let Some(full_bio) = &patch.full_bio {
            qb.push(", full_bio = ").push_bind(full_bio.as_str());
        }
        if let Some(linkedin_url) = &patch.linkedin_url {
            qb.push(", linkedin_url = ").push_bind(linkedin_url.as_str());
        }
        if let Some(imdb_url) = &patch.imdb_url {
            qb.push(", imdb_url = ").push_bind(imdb_url.as_str());
        }
        if let Some(sort_order) = patch.sort_order {
            qb.push(", sort_order = ").push_bind(sort_order);
        }
        if let Some(is_active) = patch.is_active {
            qb.push(", is_active = ").push_bind(is_active);
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    pub async fn delete_team_member(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
