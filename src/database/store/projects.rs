use super::{ensure_exists, Store};
use crate::database::manager::DatabaseError;
use crate::database::models::{Project, ProjectFields};

impl Store {
    pub async fn list_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        let rows = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, github_url, keyword, key_skill, profile_id
             FROM projects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, DatabaseError> {
        sqlx::query_as::<_, Project>(
            "SELECT id, name, description, github_url, keyword, key_skill, profile_id
             FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("project", id))
    }

    pub async fn insert_project(&self, fields: ProjectFields) -> Result<Project, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        ensure_exists(&mut tx, "profiles", "profile", fields.profile_id).await?;

        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, description, github_url, keyword, key_skill, profile_id)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, name, description, github_url, keyword, key_skill, profile_id",
        )
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.github_url)
        .bind(fields.keyword)
        .bind(fields.key_skill)
        .bind(fields.profile_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(project)
    }

    pub async fn update_project(&self, id: i64, fields: ProjectFields) -> Result<Project, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        ensure_exists(&mut tx, "profiles", "profile", fields.profile_id).await?;

        let project = sqlx::query_as::<_, Project>(
            "UPDATE projects
             SET name = ?, description = ?, github_url = ?, keyword = ?, key_skill = ?, profile_id = ?
             WHERE id = ?
             RETURNING id, name, description, github_url, keyword, key_skill, profile_id",
        )
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.github_url)
        .bind(fields.keyword)
        .bind(fields.key_skill)
        .bind(fields.profile_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DatabaseError::not_found("project", id))?;

        tx.commit().await?;
        Ok(project)
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), DatabaseError> {
        let removed = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if removed == 0 {
            return Err(DatabaseError::not_found("project", id));
        }
        Ok(())
    }
}
