use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::certificate::Certificate;

#[derive(Debug, Clone, FromRow)]
pub struct InstitutionRow {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// Wire shape: the institution plus every certificate it issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertifyingInstitution {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub certificates: Vec<NestedCertificate>,
}

impl CertifyingInstitution {
    pub fn assemble(row: InstitutionRow, certificates: Vec<Certificate>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url: row.url,
            certificates: certificates.into_iter().map(NestedCertificate::from).collect(),
        }
    }
}

/// A certificate as it appears under its institution; the institution id is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedCertificate {
    pub id: i64,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub profiles: Vec<i64>,
}

impl From<Certificate> for NestedCertificate {
    fn from(certificate: Certificate) -> Self {
        Self {
            id: certificate.id,
            name: certificate.name,
            timestamp: certificate.timestamp,
            profiles: certificate.profiles,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstitutionFields {
    pub name: String,
    pub url: String,
}

/// Institution plus the certificates created inline with it.
#[derive(Debug, Clone, Default)]
pub struct NewInstitution {
    pub fields: InstitutionFields,
    pub certificates: Vec<InlineCertificate>,
}

#[derive(Debug, Clone, Default)]
pub struct InlineCertificate {
    pub name: String,
    pub profiles: Vec<i64>,
}
