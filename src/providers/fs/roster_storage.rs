use crate::{
    errors::AppError,
    providers::{
        fs::{
            bin_roster::BinRosterFile, csv_roster::CsvRosterFile, json_roster::JsonRosterFile,
            xml_roster::XmlRosterFile,
        },
        roster_reader::RosterReader,
        roster_writer::RosterWriter,
    },
    shapes::member::MemberEntry,
};
use async_trait::async_trait;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatEnum {
    Csv,
    Json,
    Xml,
    Bin,
}

impl FormatEnum {
    /// Any extension other than csv, json or xml (or none at all) is binary.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => FormatEnum::Csv,
            Some("json") => FormatEnum::Json,
            Some("xml") => FormatEnum::Xml,
            _ => FormatEnum::Bin,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FormatEnum::Csv => "csv",
            FormatEnum::Json => "json",
            FormatEnum::Xml => "xml",
            FormatEnum::Bin => "bin",
        }
    }
}

/// Picks the file adapter from the path's extension on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemRosterStorage;

impl FileSystemRosterStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RosterReader for FileSystemRosterStorage {
    async fn read(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError> {
        match FormatEnum::from_path(path) {
            FormatEnum::Csv => CsvRosterFile.read(path).await,
            FormatEnum::Json => JsonRosterFile.read(path).await,
            FormatEnum::Xml => XmlRosterFile.read(path).await,
            FormatEnum::Bin => BinRosterFile.read(path).await,
        }
    }
}

#[async_trait]
impl RosterWriter for FileSystemRosterStorage {
    async fn write(&self, roster: &[MemberEntry], path: &Path) -> Result<(), AppError> {
        match FormatEnum::from_path(path) {
            FormatEnum::Csv => CsvRosterFile.write(roster, path).await,
            FormatEnum::Json => JsonRosterFile.write(roster, path).await,
            FormatEnum::Xml => XmlRosterFile.write(roster, path).await,
            FormatEnum::Bin => BinRosterFile.write(roster, path).await,
        }
    }
}
