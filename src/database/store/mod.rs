//! Row storage for the four portfolio entities plus API users.
//!
//! Every write runs inside one transaction. Referential integrity is enforced
//! here, not by `ON DELETE` clauses:
//!
//! * deleting a profile removes its projects and its certificate links
//! * deleting an institution removes its certificates and their links
//! * deleting a certificate removes only its links

mod certificates;
mod institutions;
mod profiles;
mod projects;
mod users;

use std::collections::{BTreeMap, BTreeSet};

use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::{Certificate, CertificateRow};

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Fail with `MissingReference` unless `table` has a row with `id`.
async fn ensure_exists(
    conn: &mut SqliteConnection,
    table: &'static str,
    field: &str,
    id: i64,
) -> Result<(), DatabaseError> {
    let sql = format!("SELECT id FROM {} WHERE id = ?", table);
    let found = sqlx::query_scalar::<_, i64>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(DatabaseError::missing_reference(field, id)),
    }
}

/// Profile ids linked to each of `certificate_ids`, ascending.
async fn profile_links(
    conn: &mut SqliteConnection,
    certificate_ids: &[i64],
) -> Result<BTreeMap<i64, Vec<i64>>, DatabaseError> {
    let mut links: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
    if certificate_ids.is_empty() {
        return Ok(links);
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT certificate_id, profile_id FROM certificate_profiles WHERE certificate_id IN (",
    );
    let mut ids = builder.separated(", ");
    for id in certificate_ids {
        ids.push_bind(*id);
    }
    ids.push_unseparated(") ORDER BY certificate_id, profile_id");

    let rows: Vec<(i64, i64)> = builder.build_query_as().fetch_all(&mut *conn).await?;
    for (certificate_id, profile_id) in rows {
        links.entry(certificate_id).or_default().push(profile_id);
    }
    Ok(links)
}

async fn with_profiles(
    conn: &mut SqliteConnection,
    rows: Vec<CertificateRow>,
) -> Result<Vec<Certificate>, DatabaseError> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut links = profile_links(conn, &ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let profiles = links.remove(&row.id).unwrap_or_default();
            Certificate::assemble(row, profiles)
        })
        .collect())
}

/// Replace the profile set of one certificate. `field` names the request
/// field reported when a profile id is unknown.
async fn replace_links(
    conn: &mut SqliteConnection,
    certificate_id: i64,
    profiles: &[i64],
    field: &str,
) -> Result<(), DatabaseError> {
    let profiles: BTreeSet<i64> = profiles.iter().copied().collect();
    for profile_id in &profiles {
        ensure_exists(conn, "profiles", field, *profile_id).await?;
    }

    sqlx::query("DELETE FROM certificate_profiles WHERE certificate_id = ?")
        .bind(certificate_id)
        .execute(&mut *conn)
        .await?;

    for profile_id in profiles {
        sqlx::query("INSERT INTO certificate_profiles (certificate_id, profile_id) VALUES (?, ?)")
            .bind(certificate_id)
            .bind(profile_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
