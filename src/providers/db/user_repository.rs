use crate::{
    errors::AppError,
    logging::logger::log_debug,
    providers::user_repository::UserRepository,
    shapes::user::UserEntry,
};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, username: &str) -> Result<Option<UserEntry>, AppError> {
        let user = sqlx::query_as::<_, UserEntry>(
            "SELECT username, password FROM usuarios WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_password(&self, username: &str) -> Result<Option<String>, AppError> {
        Ok(self.get_user(username).await?.map(|u| u.password))
    }

    /// Fails when `username` is already taken.
    async fn save_user(&self, user: &UserEntry) -> Result<(), AppError> {
        sqlx::query("INSERT INTO usuarios (username, password) VALUES (?, ?)")
            .bind(&user.username)
            .bind(&user.password)
            .execute(&self.pool)
            .await?;
        log_debug(&format!("saved user '{}'", user.username));
        Ok(())
    }
}
