use crate::{
    errors::{AppError, IOError},
    logging::logger::log_debug,
    providers::{
        fs::path::{check_parent_dir, check_readable_file},
        roster_reader::RosterReader,
        roster_writer::RosterWriter,
    },
    shapes::{
        dto::{MemberDto, MemberXmlDto, TeamXmlDto},
        member::MemberEntry,
    },
};
use async_trait::async_trait;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::path::Path;
use tokio::fs::{read_to_string, write};

const ROOT_ELEMENT: &str = "equipo";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

pub struct XmlRosterFile;

impl XmlRosterFile {
    fn encode(team: &TeamXmlDto) -> Result<String, AppError> {
        let mut body = String::new();
        let mut serializer = Serializer::with_root(&mut body, Some(ROOT_ELEMENT))
            .map_err(|e| AppError::IO(IOError::EncodingError(e.to_string())))?;
        serializer.indent(' ', 4);
        team.serialize(serializer)
            .map_err(|e| AppError::IO(IOError::EncodingError(e.to_string())))?;
        Ok(format!("{}{}\n", XML_DECLARATION, body))
    }
}

#[async_trait]
impl RosterReader for XmlRosterFile {
    async fn read(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError> {
        log_debug(&format!("reading XML roster '{}'", path.display()));
        check_readable_file(path).await?;
        let content = read_to_string(path)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let team: TeamXmlDto = quick_xml::de::from_str(&content)
            .map_err(|e| AppError::IO(IOError::EncodingError(e.to_string())))?;
        team.members
            .into_iter()
            .map(|xml| MemberDto::try_from(xml).and_then(MemberEntry::try_from))
            .collect()
    }
}

#[async_trait]
impl RosterWriter for XmlRosterFile {
    async fn write(&self, roster: &[MemberEntry], path: &Path) -> Result<(), AppError> {
        log_debug(&format!(
            "writing {} members to XML roster '{}'",
            roster.len(),
            path.display()
        ));
        check_parent_dir(path)?;
        let team = TeamXmlDto {
            members: roster
                .iter()
                .map(|m| MemberXmlDto::from(MemberDto::from(m)))
                .collect(),
        };
        let xml = Self::encode(&team)?;
        write(path, xml)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))
    }
}
