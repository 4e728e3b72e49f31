use tracing::debug;

use super::Store;
use crate::database::manager::DatabaseError;
use crate::database::models::{CertificateSummary, Profile, ProfileDetail, ProfileFields, Project};

impl Store {
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, DatabaseError> {
        let rows = sqlx::query_as::<_, Profile>(
            "SELECT id, name, github, linkedin, bio FROM profiles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_profile(&self, id: i64) -> Result<Profile, DatabaseError> {
        sqlx::query_as::<_, Profile>("SELECT id, name, github, linkedin, bio FROM profiles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("profile", id))
    }

    pub async fn insert_profile(&self, fields: ProfileFields) -> Result<Profile, DatabaseError> {
        let profile = sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (name, github, linkedin, bio) VALUES (?, ?, ?, ?)
             RETURNING id, name, github, linkedin, bio",
        )
        .bind(fields.name)
        .bind(fields.github)
        .bind(fields.linkedin)
        .bind(fields.bio)
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }

    pub async fn update_profile(&self, id: i64, fields: ProfileFields) -> Result<Profile, DatabaseError> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET name = ?, github = ?, linkedin = ?, bio = ? WHERE id = ?
             RETURNING id, name, github, linkedin, bio",
        )
        .bind(fields.name)
        .bind(fields.github)
        .bind(fields.linkedin)
        .bind(fields.bio)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("profile", id))
    }

    /// Removes the profile, its projects and its certificate links.
    /// Certificates themselves survive.
    pub async fn delete_profile(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let links = sqlx::query("DELETE FROM certificate_profiles WHERE profile_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let projects = sqlx::query("DELETE FROM projects WHERE profile_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let removed = sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            return Err(DatabaseError::not_found("profile", id));
        }

        tx.commit().await?;
        debug!(profile = id, projects, links, "deleted profile");
        Ok(())
    }

    /// Profile with its projects and linked certificates, for the HTML page.
    pub async fn profile_detail(&self, id: i64) -> Result<ProfileDetail, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let profile = sqlx::query_as::<_, Profile>("SELECT id, name, github, linkedin, bio FROM profiles WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| DatabaseError::not_found("profile", id))?;

        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, github_url, keyword, key_skill, profile_id
             FROM projects WHERE profile_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        let certificates = sqlx::query_as::<_, CertificateSummary>(
            "SELECT c.id AS id, c.name AS name, i.name AS institution
             FROM certificates c
             JOIN certificate_profiles cp ON cp.certificate_id = c.id
             JOIN certifying_institutions i ON i.id = c.certifying_institution_id
             WHERE cp.profile_id = ?
             ORDER BY c.id",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(ProfileDetail {
            profile,
            projects,
            certificates,
        })
    }
}
