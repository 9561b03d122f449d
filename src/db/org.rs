//! Organization chart table operations.

use sqlx::QueryBuilder;

use super::{degrade_list, AppState};
use crate::org::model::{CreatePositionRequest, OrgPosition, UpdatePositionRequest};

const COLUMNS: &str =
    "id, title, name, department, parent_id, photo, bio, sort_order, created_at, updated_at";

impl AppState {
    pub async fn get_org_positions(&self) -> Vec<OrgPosition> {
        let sql = format!("SELECT {COLUMNS} FROM org_positions ORDER BY sort_order ASC");
        let result = sqlx::query_as::<_, OrgPosition>(&sql).fetch_all(&self.pool).await;
        degrade_list(result, "org positions")
    }

    pub async fn create_org_position(
        &self,
        req: &CreatePositionRequest,
    ) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO org_positions (title, name, department, parent_id, photo, bio, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0)) \
             RETURNING id",
        )
        .bind(req.title.as_str())
        .bind(req.name.as_deref())
        .bind(req.department.as_deref())
        .bind(req.parent_id)
        .bind(req.photo.as_deref())
        .bind(req.bio.as_deref())
        .bind(req.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_org_position(
        &self,
        id: i32,
        patch: &UpdatePositionRequest,
    ) -> Result<(), sqlx::Error> {
        let mut qb = QueryBuilder::<sqlx::Postgres>::new("UPDATE org_positions SET updated_at = NOW()");
        if let Some(title) = &patch.title {
            qb.push(", title = ").push_bind(title.as_str());
        }
        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name.as_str());
        }
        if let Some(department) = &patch.department {
            qb.push(", department = ").push_bind(department.as_str());
        }
        if let Some(parent_id) = patch.parent_id {
            qb.push(", parent_id = ").push_bind(parent_id);
        }
        if let Some(photo) = &patch.photo {
            qb.push(", photo = ").push_bind(photo.as_str());
        }
        if let Some(bio) = &patch.bio {
            qb.push(", bio = ").push_bind(bio.as_str());
        }
        if let Some(sort_order) = patch.sort_order {
            qb.push(", sort_order = ").push_bind(sort_order);
        }
        qb.push(" WHERE id = ").push_bind(id);

        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    /// Deletion does not cascade; children of the deleted position keep
    /// their dangling parent_id and surface as roots in the tree.
    pub async fn delete_org_position(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM org_positions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
