use tracing::info;

use super::Store;
use crate::database::manager::DatabaseError;
use crate::database::models::User;

impl Store {
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, is_active FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// `password_hash` must already be hashed (see `auth::password`).
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        is_active: bool,
    ) -> Result<User, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let taken = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&mut *tx)
            .await?;
        if taken.is_some() {
            return Err(DatabaseError::Conflict(format!("user '{}' already exists", username)));
        }

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, is_active) VALUES (?, ?, ?)
             RETURNING id, username, password_hash, is_active",
        )
        .bind(username)
        .bind(password_hash)
        .bind(is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| username_conflict(e, username))?;

        tx.commit().await?;
        info!("Created user: {}", user.username);
        Ok(user)
    }
}

/// A concurrent create can slip in between the lookup and the insert; the
/// `UNIQUE` constraint then reports it.
fn username_conflict(err: sqlx::Error, username: &str) -> DatabaseError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DatabaseError::Conflict(format!("user '{}' already exists", username))
        }
        other => DatabaseError::Sqlx(other),
    }
}
