use sqlx::FromRow;

/// API account used to obtain bearer tokens. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
}
