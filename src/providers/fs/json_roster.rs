use crate::{
    errors::{AppError, IOError},
    logging::logger::log_debug,
    providers::{
        fs::path::{check_parent_dir, check_readable_file},
        roster_reader::RosterReader,
        roster_writer::RosterWriter,
    },
    shapes::{dto::MemberDto, member::MemberEntry},
};
use async_trait::async_trait;
use serde_json::{from_str, to_vec_pretty};
use std::path::Path;
use tokio::fs::{read_to_string, write};

pub struct JsonRosterFile;

#[async_trait]
impl RosterReader for JsonRosterFile {
    async fn read(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError> {
        log_debug(&format!("reading JSON roster '{}'", path.display()));
        check_readable_file(path).await?;
        let content = read_to_string(path)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let dtos: Vec<MemberDto> =
            from_str(&content).map_err(|e| AppError::IO(IOError::from(e)))?;
        dtos.into_iter().map(MemberEntry::try_from).collect()
    }
}

#[async_trait]
impl RosterWriter for JsonRosterFile {
    async fn write(&self, roster: &[MemberEntry], path: &Path) -> Result<(), AppError> {
        log_debug(&format!(
            "writing {} members to JSON roster '{}'",
            roster.len(),
            path.display()
        ));
        check_parent_dir(path)?;
        let dtos: Vec<MemberDto> = roster.iter().map(MemberDto::from).collect();
        let json = to_vec_pretty(&dtos).map_err(|e| AppError::IO(IOError::from(e)))?;
        write(path, json)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))
    }
}
