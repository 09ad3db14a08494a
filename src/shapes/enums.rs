use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, IOError};

/// Field position of a player.
///
/// Serialized with the upper-case names used by every file format and by the
/// `posicion` column of the members table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionEnum {
    Centrocampista,
    Delantero,
    Portero,
    Defensa,
}

impl fmt::Display for PositionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionEnum::Centrocampista => "CENTROCAMPISTA",
            PositionEnum::Delantero => "DELANTERO",
            PositionEnum::Portero => "PORTERO",
            PositionEnum::Defensa => "DEFENSA",
        };
        write!(f, "{}", label)
    }
}

impl PositionEnum {
    pub fn friendly_name(&self) -> &'static str {
        match self {
            PositionEnum::Centrocampista => "midfielder",
            PositionEnum::Delantero => "forward",
            PositionEnum::Portero => "goalkeeper",
            PositionEnum::Defensa => "defender",
        }
    }
}

impl FromStr for PositionEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CENTROCAMPISTA" => Ok(PositionEnum::Centrocampista),
            "DELANTERO" => Ok(PositionEnum::Delantero),
            "PORTERO" => Ok(PositionEnum::Portero),
            "DEFENSA" => Ok(PositionEnum::Defensa),
            _ => Err(AppError::IO(IOError::EncodingError(format!(
                "invalid position: {}",
                s
            )))),
        }
    }
}

/// Specialty of a coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialtyEnum {
    EntrenadorAsistente,
    EntrenadorPorteros,
    EntrenadorPrincipal,
}

impl fmt::Display for SpecialtyEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpecialtyEnum::EntrenadorAsistente => "ENTRENADOR_ASISTENTE",
            SpecialtyEnum::EntrenadorPorteros => "ENTRENADOR_PORTEROS",
            SpecialtyEnum::EntrenadorPrincipal => "ENTRENADOR_PRINCIPAL",
        };
        write!(f, "{}", label)
    }
}

impl SpecialtyEnum {
    pub fn friendly_name(&self) -> &'static str {
        match self {
            SpecialtyEnum::EntrenadorAsistente => "assistant coach",
            SpecialtyEnum::EntrenadorPorteros => "goalkeeping coach",
            SpecialtyEnum::EntrenadorPrincipal => "head coach",
        }
    }
}

impl FromStr for SpecialtyEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ENTRENADOR_ASISTENTE" => Ok(SpecialtyEnum::EntrenadorAsistente),
            "ENTRENADOR_PORTEROS" => Ok(SpecialtyEnum::EntrenadorPorteros),
            "ENTRENADOR_PRINCIPAL" => Ok(SpecialtyEnum::EntrenadorPrincipal),
            _ => Err(AppError::IO(IOError::EncodingError(format!(
                "invalid specialty: {}",
                s
            )))),
        }
    }
}

/// Which members a roster listing keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RoleFilterEnum {
    #[default]
    All,
    Players,
    Coaches,
}

/// Ordering applied to a roster listing.
///
/// Sorting is stable, so members with equal keys keep their store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortEnum {
    #[default]
    None,
    Salary,
    SalaryDesc,
    Surname,
    SurnameDesc,
}
