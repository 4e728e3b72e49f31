use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CertificateRow {
    pub id: i64,
    pub name: String,
    pub certifying_institution_id: i64,
    pub timestamp: DateTime<Utc>,
}

/// Wire fields: `id`, `name`, `certifying_institution`, `timestamp`, `profiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    #[serde(rename = "certifying_institution")]
    pub certifying_institution_id: i64,
    pub timestamp: DateTime<Utc>,
    pub profiles: Vec<i64>,
}

impl Certificate {
    pub fn assemble(row: CertificateRow, profiles: Vec<i64>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            certifying_institution_id: row.certifying_institution_id,
            timestamp: row.timestamp,
            profiles,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CertificateFields {
    pub name: String,
    pub certifying_institution_id: i64,
    /// `None` leaves the current associations untouched.
    pub profiles: Option<Vec<i64>>,
}

/// Certificate line on the profile page.
#[derive(Debug, Clone, FromRow)]
pub struct CertificateSummary {
    pub id: i64,
    pub name: String,
    pub institution: String,
}
