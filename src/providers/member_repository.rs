use crate::{errors::AppError, shapes::member::MemberEntry};
use async_trait::async_trait;

#[async_trait]
pub trait MemberRepository {
    async fn save(&self, member: MemberEntry) -> Result<MemberEntry, AppError>;
    async fn delete(&self, id: i64) -> Result<Option<MemberEntry>, AppError>;
    async fn update(&self, id: i64, member: MemberEntry) -> Result<Option<MemberEntry>, AppError>;
    async fn get_all(&self) -> Result<Vec<MemberEntry>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<MemberEntry>, AppError>;
}
