use crate::{errors::AppError, shapes::user::UserEntry};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository {
    async fn get_password(&self, username: &str) -> Result<Option<String>, AppError>;
    async fn save_user(&self, user: &UserEntry) -> Result<(), AppError>;
}
