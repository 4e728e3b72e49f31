use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub github_url: String,
    pub keyword: String,
    pub key_skill: String,
    #[serde(rename = "profile")]
    pub profile_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub github_url: String,
    pub keyword: String,
    pub key_skill: String,
    pub profile_id: i64,
}
