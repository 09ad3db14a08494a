use crate::{
    constants::{MAX_HEIGHT_METERS, MAX_SHIRT_NUMBER},
    errors::AppError,
    logging::logger::log_debug,
    shapes::member::{MemberEntry, MemberRole, PlayerDetails},
};
use chrono::{Local, NaiveDate};

/// Field rules for a roster member. Checks run in a fixed order and the first
/// failing rule is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberValidator;

impl MemberValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate<'a>(&self, member: &'a MemberEntry) -> Result<&'a MemberEntry, AppError> {
        self.validate_on(member, Local::now().date_naive())
    }

    pub fn validate_on<'a>(
        &self,
        member: &'a MemberEntry,
        today: NaiveDate,
    ) -> Result<&'a MemberEntry, AppError> {
        log_debug(&format!("validating member '{}'", member.full_name()));
        if member.name.trim().is_empty() {
            return Err(invalid("name must not be blank"));
        }
        if member.surname.trim().is_empty() {
            return Err(invalid("surname must not be blank"));
        }
        if member.birth_date > today {
            return Err(invalid("birth date must not be in the future"));
        }
        if member.join_date > today {
            return Err(invalid("join date must not be in the future"));
        }
        if member.join_date < member.birth_date {
            return Err(invalid("join date must not be before the birth date"));
        }
        if member.salary.is_nan() || member.salary < 0.0 {
            return Err(invalid("salary must not be negative"));
        }
        if member.country.trim().is_empty() {
            return Err(invalid("country must not be blank"));
        }
        if let MemberRole::Player(player) = &member.role {
            Self::validate_player(player)?;
        }
        Ok(member)
    }

    fn validate_player(player: &PlayerDetails) -> Result<(), AppError> {
        if !(1..=MAX_SHIRT_NUMBER).contains(&player.number) {
            return Err(invalid(&format!(
                "shirt number (dorsal) must be between 1 and {}",
                MAX_SHIRT_NUMBER
            )));
        }
        if !(0.0..=MAX_HEIGHT_METERS).contains(&player.height) {
            return Err(invalid(&format!(
                "height must be between 0 and {} meters",
                MAX_HEIGHT_METERS
            )));
        }
        if player.weight.is_nan() || player.weight < 0.0 {
            return Err(invalid("weight must not be negative"));
        }
        if player.goals < 0 {
            return Err(invalid("goals must not be negative"));
        }
        if player.matches_played < 0 {
            return Err(invalid("matches played must not be negative"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> AppError {
    AppError::Invalid(reason.to_string())
}
