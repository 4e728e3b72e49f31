use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use super::{ensure_exists, profile_links, replace_links, with_profiles, Store};
use crate::database::manager::DatabaseError;
use crate::database::models::{Certificate, CertificateFields, CertificateRow};

impl Store {
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, CertificateRow>(
            "SELECT id, name, certifying_institution_id, timestamp FROM certificates ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        with_profiles(&mut conn, rows).await
    }

    pub async fn get_certificate(&self, id: i64) -> Result<Certificate, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        load_certificate(&mut conn, id).await
    }

    /// Stamps `timestamp` with the current time; it is never written again.
    pub async fn insert_certificate(&self, fields: CertificateFields) -> Result<Certificate, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        ensure_exists(
            &mut tx,
            "certifying_institutions",
            "certifying_institution",
            fields.certifying_institution_id,
        )
        .await?;

        let profiles = fields.profiles.unwrap_or_default();
        let certificate = create_certificate(
            &mut tx,
            &fields.name,
            fields.certifying_institution_id,
            &profiles,
            "profiles",
        )
        .await?;

        tx.commit().await?;
        Ok(certificate)
    }

    pub async fn update_certificate(&self, id: i64, fields: CertificateFields) -> Result<Certificate, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        ensure_exists(
            &mut tx,
            "certifying_institutions",
            "certifying_institution",
            fields.certifying_institution_id,
        )
        .await?;

        let updated = sqlx::query("UPDATE certificates SET name = ?, certifying_institution_id = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(fields.certifying_institution_id)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(DatabaseError::not_found("certificate", id));
        }

        if let Some(profiles) = &fields.profiles {
            replace_links(&mut tx, id, profiles, "profiles").await?;
        }

        let certificate = load_certificate(&mut tx, id).await?;
        tx.commit().await?;
        Ok(certificate)
    }

    /// Removes the certificate and its profile links; profiles survive.
    pub async fn delete_certificate(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM certificate_profiles WHERE certificate_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let removed = sqlx::query("DELETE FROM certificates WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            return Err(DatabaseError::not_found("certificate", id));
        }

        tx.commit().await?;
        debug!(certificate = id, "deleted certificate");
        Ok(())
    }
}

pub(super) async fn load_certificate(conn: &mut SqliteConnection, id: i64) -> Result<Certificate, DatabaseError> {
    let row = sqlx::query_as::<_, CertificateRow>(
        "SELECT id, name, certifying_institution_id, timestamp FROM certificates WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| DatabaseError::not_found("certificate", id))?;

    let mut links = profile_links(conn, &[id]).await?;
    let profiles = links.remove(&id).unwrap_or_default();
    Ok(Certificate::assemble(row, profiles))
}

/// Insert one certificate row plus its links. The institution must already
/// have been checked (or created) by the caller.
pub(super) async fn create_certificate(
    conn: &mut SqliteConnection,
    name: &str,
    institution_id: i64,
    profiles: &[i64],
    profiles_field: &str,
) -> Result<Certificate, DatabaseError> {
    let row = sqlx::query_as::<_, CertificateRow>(
        "INSERT INTO certificates (name, certifying_institution_id, timestamp) VALUES (?, ?, ?)
         RETURNING id, name, certifying_institution_id, timestamp",
    )
    .bind(name)
    .bind(institution_id)
    .bind(Utc::now())
    .fetch_one(&mut *conn)
    .await?;

    replace_links(conn, row.id, profiles, profiles_field).await?;

    let mut links = profile_links(conn, &[row.id]).await?;
    let linked = links.remove(&row.id).unwrap_or_default();
    Ok(Certificate::assemble(row, linked))
}
