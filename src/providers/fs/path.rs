use crate::{
    constants::BACKUP_FILE_PREFIX,
    errors::{AppError, IOError},
};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tokio::fs::metadata;

/// Fails unless `path` exists and is a regular file. Read permission is
/// checked by the read itself.
pub async fn check_readable_file(path: &Path) -> Result<(), AppError> {
    let meta = metadata(path).await.map_err(|e| {
        AppError::IO(IOError::Msg(format!(
            "file '{}' does not exist or is not accessible: {}",
            path.display(),
            e
        )))
    })?;
    if !meta.is_file() {
        return Err(AppError::IO(IOError::Msg(format!(
            "'{}' is not a regular file",
            path.display()
        ))));
    }
    Ok(())
}

/// Fails unless the directory that will hold `path` exists. A bare file name
/// lives in the working directory.
pub fn check_parent_dir(path: &Path) -> Result<(), AppError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if !parent.is_dir() {
        return Err(AppError::IO(IOError::Msg(format!(
            "parent directory '{}' does not exist",
            parent.display()
        ))));
    }
    Ok(())
}

pub fn get_backup_file_path(
    backup_dir: &Path,
    timestamp: NaiveDateTime,
    extension: &str,
) -> PathBuf {
    backup_dir.join(format!(
        "{}-{}.{}",
        BACKUP_FILE_PREFIX,
        timestamp.format("%Y%m%d-%H%M%S"),
        extension
    ))
}
