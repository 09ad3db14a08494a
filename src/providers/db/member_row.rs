use crate::{
    constants::{COACH_ROLE_LABEL, PLAYER_ROLE_LABEL},
    errors::{AppError, DatabaseError},
    shapes::{
        enums::{PositionEnum, SpecialtyEnum},
        member::{CoachDetails, MemberEntry, MemberRole, PlayerDetails},
    },
};
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::FromRow;
use std::str::FromStr;

/// One row of `integrantes`. Columns that belong to the other role are NULL.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MemberRow {
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "apellidos")]
    pub surname: String,
    #[sqlx(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,
    #[sqlx(rename = "fecha_incorporacion")]
    pub join_date: NaiveDate,
    #[sqlx(rename = "salario")]
    pub salary: f64,
    #[sqlx(rename = "pais")]
    pub country: String,
    #[sqlx(rename = "rol")]
    pub role: String,
    #[sqlx(rename = "especialidad")]
    pub specialty: Option<String>,
    #[sqlx(rename = "posicion")]
    pub position: Option<String>,
    #[sqlx(rename = "dorsal")]
    pub number: Option<i32>,
    #[sqlx(rename = "altura")]
    pub height: Option<f64>,
    #[sqlx(rename = "peso")]
    pub weight: Option<f64>,
    #[sqlx(rename = "goles")]
    pub goals: Option<i32>,
    #[sqlx(rename = "partidos_jugados")]
    pub matches_played: Option<i32>,
    #[sqlx(rename = "minutos_jugados")]
    pub minutes_played: Option<i32>,
    #[sqlx(rename = "imagen")]
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&MemberEntry> for MemberRow {
    fn from(member: &MemberEntry) -> Self {
        let mut row = MemberRow {
            id: member.id,
            name: member.name.clone(),
            surname: member.surname.clone(),
            birth_date: member.birth_date,
            join_date: member.join_date,
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
            created_at: member.created_at,
            updated_at: member.updated_at,
        };
        match &member.role {
            MemberRole::Player(p) => {
                row.position = Some(p.position.to_string());
                row.number = Some(p.number);
                row.height = Some(p.height);
                row.weight = Some(p.weight);
                row.goals = Some(p.goals);
                row.matches_played = Some(p.matches_played);
                row.minutes_played = Some(p.minutes_played);
            }
            MemberRole::Coach(c) => {
                row.specialty = Some(c.specialty.to_string());
            }
        }
        row
    }
}

impl TryFrom<MemberRow> for MemberEntry {
    type Error = AppError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupted = |what: String| AppError::Database(DatabaseError::CorruptedRow(id, what));
        let column = |name: &str| corrupted(format!("column '{}' is null", name));

        let role = match row.role.as_str() {
            PLAYER_ROLE_LABEL => {
                let position = row.position.ok_or_else(|| column("posicion"))?;
                MemberRole::Player(PlayerDetails {
                    position: PositionEnum::from_str(&position)
                        .map_err(|_| corrupted(format!("unknown position '{}'", position)))?,
                    number: row.number.ok_or_else(|| column("dorsal"))?,
                    height: row.height.ok_or_else(|| column("altura"))?,
                    weight: row.weight.ok_or_else(|| column("peso"))?,
                    goals: row.goals.ok_or_else(|| column("goles"))?,
                    matches_played: row
                        .matches_played
                        .ok_or_else(|| column("partidos_jugados"))?,
                    minutes_played: row.minutes_played.unwrap_or(0),
                })
            }
            COACH_ROLE_LABEL => {
                let specialty = row.specialty.ok_or_else(|| column("especialidad"))?;
                MemberRole::Coach(CoachDetails {
                    specialty: SpecialtyEnum::from_str(&specialty)
                        .map_err(|_| corrupted(format!("unknown specialty '{}'", specialty)))?,
                })
            }
            other => return Err(corrupted(format!("unknown role '{}'", other))),
        };

        Ok(MemberEntry {
            id: row.id,
            name: row.name,
            surname: row.surname,
            birth_date: row.birth_date,
            join_date: row.join_date,
            salary: row.salary,
            country: row.country,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
            role,
        })
    }
}
