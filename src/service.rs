use crate::{
    cache::MemberCache,
    errors::AppError,
    logging::logger::{log_debug, log_info, log_warn},
    providers::{
        fs::{path::get_backup_file_path, roster_storage::FormatEnum},
        member_repository::MemberRepository,
        roster_reader::RosterReader,
        roster_writer::RosterWriter,
    },
    shapes::member::MemberEntry,
    validator::MemberValidator,
};
use chrono::Local;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::Mutex;

/// Roster use cases on top of the store, the file adapters and the cache.
///
/// Single record reads go through the cache; writes invalidate it.
pub struct RosterService<MR, RR, RW>
where
    MR: MemberRepository + Send + Sync + 'static,
    RR: RosterReader + Send + Sync + 'static,
    RW: RosterWriter + Send + Sync + 'static,
{
    repository: Arc<MR>,
    cache: Mutex<MemberCache>,
    validator: MemberValidator,
    reader: Arc<RR>,
    writer: Arc<RW>,
}

impl<MR, RR, RW> RosterService<MR, RR, RW>
where
    MR: MemberRepository + Send + Sync + 'static,
    RR: RosterReader + Send + Sync + 'static,
    RW: RosterWriter + Send + Sync + 'static,
{
    pub fn new(
        repository: Arc<MR>,
        cache: MemberCache,
        validator: MemberValidator,
        reader: Arc<RR>,
        writer: Arc<RW>,
    ) -> Self {
        Self {
            repository,
            cache: Mutex::new(cache),
            validator,
            reader,
            writer,
        }
    }

    /// Stores every member read from `path` and returns them with their new ids.
    ///
    /// Records are saved one by one; when a save fails the members saved
    /// before it stay in the store.
    pub async fn import_from_file(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError> {
        log_info(&format!("importing members from '{}'", path.display()));
        let roster = self.reader.read(path).await?;
        let mut saved = Vec::with_capacity(roster.len());
        for member in roster {
            saved.push(self.repository.save(MemberEntry { id: 0, ..member }).await?);
        }
        log_info(&format!("imported {} members", saved.len()));
        Ok(saved)
    }

    pub async fn export_to_file(&self, path: &Path) -> Result<usize, AppError> {
        log_info(&format!("exporting members to '{}'", path.display()));
        let roster = self.repository.get_all().await?;
        self.writer.write(&roster, path).await?;
        Ok(roster.len())
    }

    /// Exports the whole roster to a timestamped file inside `backup_dir`.
    pub async fn backup(&self, backup_dir: &Path, format: FormatEnum) -> Result<PathBuf, AppError> {
        let path = get_backup_file_path(
            backup_dir,
            Local::now().naive_local(),
            format.extension(),
        );
        self.export_to_file(&path).await?;
        Ok(path)
    }

    pub async fn get_all(&self) -> Result<Vec<MemberEntry>, AppError> {
        log_debug("fetching all members");
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<MemberEntry, AppError> {
        log_debug(&format!("fetching member {}", id));
        if let Some(member) = self.cache.lock().await.get(id) {
            return Ok(member);
        }
        match self.repository.get_by_id(id).await? {
            Some(member) => {
                self.cache.lock().await.put(member.clone());
                Ok(member)
            }
            None => Err(AppError::NotFound(id)),
        }
    }

    pub async fn save(&self, member: MemberEntry) -> Result<MemberEntry, AppError> {
        log_debug(&format!("saving member '{}'", member.full_name()));
        if let Err(e) = self.validator.validate(&member) {
            log_warn(&format!("rejected member '{}': {}", member.full_name(), e));
            return Err(e);
        }
        self.repository.save(member).await
    }

    pub async fn update(&self, id: i64, member: MemberEntry) -> Result<MemberEntry, AppError> {
        log_debug(&format!("updating member {}", id));
        if let Err(e) = self.validator.validate(&member) {
            log_warn(&format!("rejected update of member {}: {}", id, e));
            return Err(e);
        }
        match self.repository.update(id, member).await? {
            Some(updated) => {
                self.cache.lock().await.invalidate(id);
                Ok(updated)
            }
            None => Err(AppError::NotFound(id)),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<MemberEntry, AppError> {
        log_debug(&format!("deleting member {}", id));
        match self.repository.delete(id).await? {
            Some(deleted) => {
                self.cache.lock().await.invalidate(id);
                Ok(deleted)
            }
            None => Err(AppError::NotFound(id)),
        }
    }

    #[cfg(test)]
    pub async fn cached_count(&self) -> usize {
        self.cache.lock().await.len()
    }
}
