//! MySQL implementation of the UserRepository trait
//!
//! Persists accounts in the `users` table. Uniqueness of `username` and
//! `mobile` is enforced by database indexes; the registration service
//! checks first, and a race that slips past those checks surfaces here
//! as a database error.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use pw_core::domain::entities::user::User;
use pw_core::errors::DomainError;
use pw_core::repositories::UserRepository;

/// MySQL-backed user store
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists_where(&self, query: &str, value: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check user existence: {}", e),
            })?;

        let exists: i8 = row.try_get("user_exists").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(exists == 1)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE username = ?
            ) as user_exists
        "#;

        self.exists_where(query, username).await
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE mobile = ?
            ) as user_exists
        "#;

        self.exists_where(query, mobile).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, password_hash, mobile,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.mobile)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_shared::config::database::DatabaseConfig;

    #[tokio::test]
    #[ignore] // Requires actual database
    async fn test_create_then_exists_roundtrip() {
        let config = DatabaseConfig::from_env();
        let pool = crate::database::DatabasePool::new(config).await.unwrap();
        let repo = MySqlUserRepository::new(pool.get_pool().clone());

        let user = User::new(
            format!("it_{}", &uuid::Uuid::new_v4().simple().to_string()[..12]),
            "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            "13800009999".to_string(),
        );
        let username = user.username.clone();

        repo.create(user).await.unwrap();
        assert!(repo.exists_by_username(&username).await.unwrap());
        assert!(repo.exists_by_mobile("13800009999").await.unwrap());
        assert!(!repo.exists_by_username("never_registered").await.unwrap());
    }
}
