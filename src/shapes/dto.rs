use crate::{
    constants::{COACH_ROLE_LABEL, DATE_FORMAT, DEFAULT_IMAGE, PLAYER_ROLE_LABEL},
    errors::{AppError, IOError},
    shapes::{
        enums::{PositionEnum, SpecialtyEnum},
        member::{CoachDetails, MemberEntry, MemberRole, PlayerDetails},
    },
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

/// Flat record shared by the JSON and binary formats.
///
/// Role specific fields are optional; an empty string counts as absent so
/// files written by older exports (`"especialidad": ""` on players) still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surname: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "fecha_incorporacion")]
    pub join_date: String,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "especialidad", default)]
    pub specialty: Option<String>,
    #[serde(rename = "posicion", default)]
    pub position: Option<String>,
    #[serde(rename = "dorsal", default)]
    pub number: Option<i32>,
    #[serde(rename = "altura", default)]
    pub height: Option<f64>,
    #[serde(rename = "peso", default)]
    pub weight: Option<f64>,
    #[serde(rename = "goles", default)]
    pub goals: Option<i32>,
    #[serde(rename = "partidos_jugados", default)]
    pub matches_played: Option<i32>,
    #[serde(rename = "minutos_jugados", default)]
    pub minutes_played: Option<i32>,
    #[serde(rename = "imagen", default = "default_image")]
    pub image: String,
}

impl From<&MemberEntry> for MemberDto {
    fn from(member: &MemberEntry) -> Self {
        let mut dto = MemberDto {
            id: member.id,
            name: member.name.clone(),
            surname: member.surname.clone(),
            birth_date: member.birth_date.format(DATE_FORMAT).to_string(),
            join_date: member.join_date.format(DATE_FORMAT).to_string(),
            salary: member.salary,
            country: member.country.clone(),
            role: member.role_label().to_string(),
            specialty: None,
            position: None,
            number: None,
            height: None,
            weight: None,
            goals: None,
            matches_played: None,
            minutes_played: None,
            image: member.image.clone(),
        };
        match &member.role {
            MemberRole::Player(p) => {
                dto.position = Some(p.position.to_string());
                dto.number = Some(p.number);
                dto.height = Some(p.height);
                dto.weight = Some(p.weight);
                dto.goals = Some(p.goals);
                dto.matches_played = Some(p.matches_played);
                dto.minutes_played = Some(p.minutes_played);
            }
            MemberRole::Coach(c) => {
                dto.specialty = Some(c.specialty.to_string());
            }
        }
        dto
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::IO(IOError::EncodingError(format!(
            "invalid {} '{}': {}",
            field, value, e
        )))
    })
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::IO(IOError::EncodingError(format!("missing {}", field))))
}

/// Text fields lose surrounding whitespace in every format.
fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<MemberDto> for MemberEntry {
    type Error = AppError;

    fn try_from(dto: MemberDto) -> Result<Self, Self::Error> {
        let role = match dto.role.trim() {
            PLAYER_ROLE_LABEL => {
                let position = required("posicion", non_empty(dto.position))?;
                MemberRole::Player(PlayerDetails {
                    position: PositionEnum::from_str(&position)?,
                    number: required("dorsal", dto.number)?,
                    height: required("altura", dto.height)?,
                    weight: required("peso", dto.weight)?,
                    goals: required("goles", dto.goals)?,
                    matches_played: required("partidos_jugados", dto.matches_played)?,
                    minutes_played: dto.minutes_played.unwrap_or(0),
                })
            }
            COACH_ROLE_LABEL => {
                let specialty = required("especialidad", non_empty(dto.specialty))?;
                MemberRole::Coach(CoachDetails {
                    specialty: SpecialtyEnum::from_str(&specialty)?,
                })
            }
            other => {
                return Err(AppError::IO(IOError::EncodingError(format!(
                    "unknown role '{}'",
                    other
                ))))
            }
        };
        let now = Local::now().naive_local();
        Ok(MemberEntry {
            id: dto.id,
            birth_date: parse_date("fecha_nacimiento", &dto.birth_date)?,
            join_date: parse_date("fecha_incorporacion", &dto.join_date)?,
            name: trimmed(dto.name),
            surname: trimmed(dto.surname),
            salary: dto.salary,
            country: trimmed(dto.country),
            image: if dto.image.trim().is_empty() {
                default_image()
            } else {
                trimmed(dto.image)
            },
            created_at: now,
            updated_at: now,
            role,
        })
    }
}

/// One line of the 15 column CSV layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvMemberRecord {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surname: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "fecha_incorporacion")]
    pub join_date: String,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "especialidad")]
    pub specialty: Option<String>,
    #[serde(rename = "posicion")]
    pub position: Option<String>,
    #[serde(rename = "dorsal")]
    pub number: Option<i32>,
    #[serde(rename = "altura")]
    pub height: Option<f64>,
    #[serde(rename = "peso")]
    pub weight: Option<f64>,
    #[serde(rename = "goles")]
    pub goals: Option<i32>,
    #[serde(rename = "partidos_jugados")]
    pub matches_played: Option<i32>,
}

impl From<MemberDto> for CsvMemberRecord {
    fn from(dto: MemberDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            surname: dto.surname,
            birth_date: dto.birth_date,
            join_date: dto.join_date,
            salary: dto.salary,
            country: dto.country,
            role: dto.role,
            specialty: dto.specialty,
            position: dto.position,
            number: dto.number,
            height: dto.height,
            weight: dto.weight,
            goals: dto.goals,
            matches_played: dto.matches_played,
        }
    }
}

impl From<CsvMemberRecord> for MemberDto {
    fn from(record: CsvMemberRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            surname: record.surname,
            birth_date: record.birth_date,
            join_date: record.join_date,
            salary: record.salary,
            country: record.country,
            role: record.role,
            specialty: record.specialty,
            position: record.position,
            number: record.number,
            height: record.height,
            weight: record.weight,
            goals: record.goals,
            matches_played: record.matches_played,
            minutes_played: None,
            image: default_image(),
        }
    }
}

/// `<equipo>` document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamXmlDto {
    #[serde(rename = "personal", default)]
    pub members: Vec<MemberXmlDto>,
}

/// `<personal>` element. Player numbers are kept as text so players and
/// coaches share one schema; non applicable fields are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberXmlDto {
    #[serde(rename = "@id")]
    pub id: i64,
    #[serde(rename = "tipo")]
    pub role: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surname: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: String,
    #[serde(rename = "fechaIncorporacion")]
    pub join_date: String,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "especialidad", default)]
    pub specialty: String,
    #[serde(rename = "posicion", default)]
    pub position: String,
    #[serde(rename = "dorsal", default)]
    pub number: String,
    #[serde(rename = "altura", default)]
    pub height: String,
    #[serde(rename = "peso", default)]
    pub weight: String,
    #[serde(rename = "goles", default)]
    pub goals: String,
    #[serde(rename = "partidosJugados", default)]
    pub matches_played: String,
    #[serde(rename = "minutos_jugados", default)]
    pub minutes_played: String,
    #[serde(rename = "imagen", default = "default_image")]
    pub image: String,
}

fn text_of<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_text<T: FromStr>(field: &str, value: &str) -> Result<Option<T>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<T>().map(Some).map_err(|_| {
        AppError::IO(IOError::EncodingError(format!(
            "invalid {} '{}'",
            field, value
        )))
    })
}

impl From<MemberDto> for MemberXmlDto {
    fn from(dto: MemberDto) -> Self {
        Self {
            id: dto.id,
            role: dto.role,
            name: dto.name,
            surname: dto.surname,
            birth_date: dto.birth_date,
            join_date: dto.join_date,
            salary: dto.salary,
            country: dto.country,
            specialty: dto.specialty.unwrap_or_default(),
            position: dto.position.unwrap_or_default(),
            number: text_of(dto.number),
            height: text_of(dto.height),
            weight: text_of(dto.weight),
            goals: text_of(dto.goals),
            matches_played: text_of(dto.matches_played),
            minutes_played: text_of(dto.minutes_played),
            image: dto.image,
        }
    }
}

impl TryFrom<MemberXmlDto> for MemberDto {
    type Error = AppError;

    fn try_from(xml: MemberXmlDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: xml.id,
            number: parse_text("dorsal", &xml.number)?,
            height: parse_text("altura", &xml.height)?,
            weight: parse_text("peso", &xml.weight)?,
            goals: parse_text("goles", &xml.goals)?,
            matches_played: parse_text("partidosJugados", &xml.matches_played)?,
            minutes_played: parse_text("minutos_jugados", &xml.minutes_played)?,
            name: xml.name,
            surname: xml.surname,
            birth_date: xml.birth_date,
            join_date: xml.join_date,
            salary: xml.salary,
            country: xml.country,
            role: xml.role,
            specialty: non_empty(Some(xml.specialty)),
            position: non_empty(Some(xml.position)),
            image: xml.image,
        })
    }
}
