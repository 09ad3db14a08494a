use crate::{errors::AppError, shapes::member::MemberEntry};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait RosterWriter {
    /// Replaces the content of `path` with `roster`.
    async fn write(&self, roster: &[MemberEntry], path: &Path) -> Result<(), AppError>;
}
