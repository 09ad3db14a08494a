use crate::shapes::{
    enums::{RoleFilterEnum, SortEnum},
    member::MemberEntry,
};
use std::cmp::Ordering;

/// Filter and ordering for a roster listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterQuery {
    /// Case-insensitive substring of the full name. Blank matches everyone.
    pub name_filter: Option<String>,
    pub role_filter: RoleFilterEnum,
    pub sort: SortEnum,
}

impl RosterQuery {
    fn matches(&self, member: &MemberEntry) -> bool {
        let role_ok = match self.role_filter {
            RoleFilterEnum::All => true,
            RoleFilterEnum::Players => member.is_player(),
            RoleFilterEnum::Coaches => !member.is_player(),
        };
        if !role_ok {
            return false;
        }
        match self.name_filter.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => member
                .full_name()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }

    pub fn apply(&self, roster: &[MemberEntry]) -> Vec<MemberEntry> {
        let mut result: Vec<MemberEntry> =
            roster.iter().filter(|m| self.matches(m)).cloned().collect();
        let by_salary =
            |a: &MemberEntry, b: &MemberEntry| a.salary.partial_cmp(&b.salary).unwrap_or(Ordering::Equal);
        let by_surname = |a: &MemberEntry, b: &MemberEntry| {
            a.surname.to_lowercase().cmp(&b.surname.to_lowercase())
        };
        match self.sort {
            SortEnum::None => {}
            SortEnum::Salary => result.sort_by(by_salary),
            SortEnum::SalaryDesc => result.sort_by(|a, b| by_salary(b, a)),
            SortEnum::Surname => result.sort_by(by_surname),
            SortEnum::SurnameDesc => result.sort_by(|a, b| by_surname(b, a)),
        }
        result
    }
}

/// Aggregate figures shown next to a roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterStats {
    pub members: usize,
    pub players: usize,
    pub coaches: usize,
    pub total_salary: f64,
    pub average_goals: f64,
    pub average_minutes: f64,
}

impl RosterStats {
    pub fn from_roster(roster: &[MemberEntry]) -> Self {
        let players: Vec<_> = roster.iter().filter_map(|m| m.as_player()).collect();
        let (average_goals, average_minutes) = if players.is_empty() {
            (0.0, 0.0)
        } else {
            let n = players.len() as f64;
            (
                players.iter().map(|p| p.goals as f64).sum::<f64>() / n,
                players.iter().map(|p| p.minutes_played as f64).sum::<f64>() / n,
            )
        };
        Self {
            members: roster.len(),
            players: players.len(),
            coaches: roster.len() - players.len(),
            total_salary: roster.iter().map(|m| m.salary).sum(),
            average_goals,
            average_minutes,
        }
    }
}

impl std::fmt::Display for RosterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "members:         {}", self.members)?;
        writeln!(f, "players:         {}", self.players)?;
        writeln!(f, "coaches:         {}", self.coaches)?;
        writeln!(f, "total salary:    {:.2}", self.total_salary)?;
        writeln!(f, "average goals:   {:.2}", self.average_goals)?;
        write!(f, "average minutes: {:.2}", self.average_minutes)
    }
}
