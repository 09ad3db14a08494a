use crate::{
    constants::{COACH_ROLE_LABEL, DEFAULT_IMAGE, PLAYER_ROLE_LABEL},
    shapes::enums::{PositionEnum, SpecialtyEnum},
};
use chrono::{Local, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetails {
    pub position: PositionEnum,
    pub number: i32,
    /// Meters.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub goals: i32,
    pub matches_played: i32,
    pub minutes_played: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoachDetails {
    pub specialty: SpecialtyEnum,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberRole {
    Player(PlayerDetails),
    Coach(CoachDetails),
}

/// A member of the team roster, either a player or a coach.
///
/// `id` is `0` until the member is stored; the store assigns the real id and
/// stamps `created_at`/`updated_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberEntry {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    pub join_date: NaiveDate,
    pub salary: f64,
    pub country: String,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub role: MemberRole,
}

impl MemberEntry {
    pub fn new(
        name: String,
        surname: String,
        birth_date: NaiveDate,
        join_date: NaiveDate,
        salary: f64,
        country: String,
        role: MemberRole,
    ) -> Self {
        let now = Local::now().naive_local();
        Self {
            id: 0,
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            birth_date,
            join_date,
            salary,
            country: country.trim().to_string(),
            image: DEFAULT_IMAGE.to_string(),
            created_at: now,
            updated_at: now,
            role,
        }
    }

    pub fn role_label(&self) -> &'static str {
        match self.role {
            MemberRole::Player(_) => PLAYER_ROLE_LABEL,
            MemberRole::Coach(_) => COACH_ROLE_LABEL,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn as_player(&self) -> Option<&PlayerDetails> {
        match &self.role {
            MemberRole::Player(p) => Some(p),
            MemberRole::Coach(_) => None,
        }
    }

    pub fn is_player(&self) -> bool {
        self.as_player().is_some()
    }

    /// Same member with both timestamps set to `timestamp`.
    pub fn stamped(self, timestamp: NaiveDateTime) -> Self {
        Self {
            created_at: timestamp,
            updated_at: timestamp,
            ..self
        }
    }
}

impl std::fmt::Display for MemberEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.role {
            MemberRole::Player(p) => write!(
                f,
                "#{} {} ({}, {} {})",
                self.id,
                self.full_name(),
                self.role_label(),
                p.position.friendly_name(),
                p.number
            ),
            MemberRole::Coach(c) => write!(
                f,
                "#{} {} ({}, {})",
                self.id,
                self.full_name(),
                self.role_label(),
                c.specialty.friendly_name()
            ),
        }
    }
}
