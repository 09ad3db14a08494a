use crate::{
    errors::{AppError, IOError},
    logging::logger::log_debug,
    providers::{
        fs::path::{check_parent_dir, check_readable_file},
        roster_reader::RosterReader,
        roster_writer::RosterWriter,
    },
    shapes::{
        dto::{CsvMemberRecord, MemberDto},
        member::MemberEntry,
    },
};
use async_trait::async_trait;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use tokio::task::spawn_blocking;

const CSV_HEADER: [&str; 15] = [
    "id",
    "nombre",
    "apellidos",
    "fecha_nacimiento",
    "fecha_incorporacion",
    "salario",
    "pais",
    "rol",
    "especialidad",
    "posicion",
    "dorsal",
    "altura",
    "peso",
    "goles",
    "partidos_jugados",
];

/// Comma separated roster with a header line. Fields holding a comma or a
/// quote are quoted on write.
pub struct CsvRosterFile;

#[async_trait]
impl RosterReader for CsvRosterFile {
    async fn read(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError> {
        log_debug(&format!("reading CSV roster '{}'", path.display()));
        check_readable_file(path).await?;
        let p = path.to_path_buf();
        let records = spawn_blocking(move || -> Result<Vec<CsvMemberRecord>, AppError> {
            let mut reader = ReaderBuilder::new()
                .has_headers(true)
                .from_path(&p)
                .map_err(|e| AppError::IO(IOError::from(e)))?;
            reader
                .deserialize()
                .collect::<Result<Vec<CsvMemberRecord>, csv::Error>>()
                .map_err(|e| AppError::IO(IOError::from(e)))
        })
        .await
        .map_err(|e| AppError::IO(IOError::Msg(format!("tokio join error: {}", e))))??;
        records
            .into_iter()
            .map(|record| MemberEntry::try_from(MemberDto::from(record)))
            .collect()
    }
}

#[async_trait]
impl RosterWriter for CsvRosterFile {
    async fn write(&self, roster: &[MemberEntry], path: &Path) -> Result<(), AppError> {
        log_debug(&format!(
            "writing {} members to CSV roster '{}'",
            roster.len(),
            path.display()
        ));
        check_parent_dir(path)?;
        let records: Vec<CsvMemberRecord> = roster
            .iter()
            .map(|m| CsvMemberRecord::from(MemberDto::from(m)))
            .collect();
        let p = path.to_path_buf();
        spawn_blocking(move || -> Result<(), AppError> {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_path(&p)
                .map_err(|e| AppError::IO(IOError::from(e)))?;
            writer
                .write_record(CSV_HEADER)
                .map_err(|e| AppError::IO(IOError::from(e)))?;
            for record in &records {
                writer
                    .serialize(record)
                    .map_err(|e| AppError::IO(IOError::from(e)))?;
            }
            writer.flush().map_err(|e| AppError::IO(IOError::from(e)))
        })
        .await
        .map_err(|e| AppError::IO(IOError::Msg(format!("tokio join error: {}", e))))?
    }
}
