use serde::Serialize;
use sqlx::FromRow;

use super::certificate::CertificateSummary;
use super::project::Project;

/// Wire fields: `id`, `name`, `github`, `linkedin`, `bio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub github: String,
    pub linkedin: String,
    pub bio: String,
}

/// Validated column values for insert/update.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub name: String,
    pub github: String,
    pub linkedin: String,
    pub bio: String,
}

/// Everything the profile page shows.
#[derive(Debug, Clone)]
pub struct ProfileDetail {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub certificates: Vec<CertificateSummary>,
}
