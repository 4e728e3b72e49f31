use std::collections::BTreeMap;

use sqlx::SqliteConnection;
use tracing::debug;

use super::certificates::create_certificate;
use super::{with_profiles, Store};
use crate::database::manager::DatabaseError;
use crate::database::models::{
    Certificate, CertificateRow, CertifyingInstitution, InstitutionFields, InstitutionRow, NewInstitution,
};

impl Store {
    pub async fn list_institutions(&self) -> Result<Vec<CertifyingInstitution>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, InstitutionRow>(
            "SELECT id, name, url FROM certifying_institutions ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;

        let certificate_rows = sqlx::query_as::<_, CertificateRow>(
            "SELECT id, name, certifying_institution_id, timestamp FROM certificates ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;

        let mut by_institution: BTreeMap<i64, Vec<Certificate>> = BTreeMap::new();
        for certificate in with_profiles(&mut conn, certificate_rows).await? {
            by_institution
                .entry(certificate.certifying_institution_id)
                .or_default()
                .push(certificate);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let certificates = by_institution.remove(&row.id).unwrap_or_default();
                CertifyingInstitution::assemble(row, certificates)
            })
            .collect())
    }

    pub async fn get_institution(&self, id: i64) -> Result<CertifyingInstitution, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        load_institution(&mut conn, id).await
    }

    /// Creates the institution and its inline certificates together; the
    /// certificates are bound to the new institution.
    pub async fn insert_institution(&self, new: NewInstitution) -> Result<CertifyingInstitution, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, InstitutionRow>(
            "INSERT INTO certifying_institutions (name, url) VALUES (?, ?) RETURNING id, name, url",
        )
        .bind(&new.fields.name)
        .bind(&new.fields.url)
        .fetch_one(&mut *tx)
        .await?;

        for (index, inline) in new.certificates.iter().enumerate() {
            let field = format!("certificates[{}].profiles", index);
            create_certificate(&mut tx, &inline.name, row.id, &inline.profiles, &field).await?;
        }

        let institution = load_institution(&mut tx, row.id).await?;
        tx.commit().await?;
        Ok(institution)
    }

    pub async fn update_institution(
        &self,
        id: i64,
        fields: InstitutionFields,
    ) -> Result<CertifyingInstitution, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE certifying_institutions SET name = ?, url = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.url)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(DatabaseError::not_found("certifying institution", id));
        }

        let institution = load_institution(&mut tx, id).await?;
        tx.commit().await?;
        Ok(institution)
    }

    /// Removes the institution, every certificate it issued, and those
    /// certificates' profile links.
    pub async fn delete_institution(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let links = sqlx::query(
            "DELETE FROM certificate_profiles WHERE certificate_id IN
             (SELECT id FROM certificates WHERE certifying_institution_id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
        let certificates = sqlx::query("DELETE FROM certificates WHERE certifying_institution_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let removed = sqlx::query("DELETE FROM certifying_institutions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            return Err(DatabaseError::not_found("certifying institution", id));
        }

        tx.commit().await?;
        debug!(institution = id, certificates, links, "deleted certifying institution");
        Ok(())
    }
}

async fn load_institution(conn: &mut SqliteConnection, id: i64) -> Result<CertifyingInstitution, DatabaseError> {
    let row = sqlx::query_as::<_, InstitutionRow>("SELECT id, name, url FROM certifying_institutions WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DatabaseError::not_found("certifying institution", id))?;

    let certificate_rows = sqlx::query_as::<_, CertificateRow>(
        "SELECT id, name, certifying_institution_id, timestamp
         FROM certificates WHERE certifying_institution_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    let certificates = with_profiles(conn, certificate_rows).await?;
    Ok(CertifyingInstitution::assemble(row, certificates))
}
