use crate::{errors::AppError, shapes::member::MemberEntry};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait RosterReader {
    /// Reads every member stored in `path`.
    async fn read(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError>;
}
