use crate::{
    cache::MemberCache,
    providers::{
        db::{
            database, member_repository::SqliteMemberRepository,
            user_repository::SqliteUserRepository,
        },
        fs::roster_storage::FileSystemRosterStorage,
    },
    service::RosterService,
    shapes::{
        enums::{PositionEnum, SpecialtyEnum},
        member::{CoachDetails, MemberEntry, MemberRole, PlayerDetails},
    },
    validator::MemberValidator,
};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::{sync::Arc, time::Duration};

pub type TestService =
    RosterService<SqliteMemberRepository, FileSystemRosterStorage, FileSystemRosterStorage>;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn player(name: &str, surname: &str, number: i32) -> MemberEntry {
    MemberEntry::new(
        name.to_string(),
        surname.to_string(),
        date(1998, 3, 14),
        date(2020, 7, 1),
        1500.5,
        "España".to_string(),
        MemberRole::Player(PlayerDetails {
            position: PositionEnum::Delantero,
            number,
            height: 1.72,
            weight: 64.0,
            goals: 12,
            matches_played: 30,
            minutes_played: 2400,
        }),
    )
}

pub fn coach(name: &str, surname: &str) -> MemberEntry {
    MemberEntry::new(
        name.to_string(),
        surname.to_string(),
        date(1975, 11, 2),
        date(2019, 1, 15),
        3200.0,
        "Argentina".to_string(),
        MemberRole::Coach(CoachDetails {
            specialty: SpecialtyEnum::EntrenadorPrincipal,
        }),
    )
}

/// Compares everything a file format or the store carries, timestamps excluded.
pub fn assert_same_member(actual: &MemberEntry, expected: &MemberEntry) {
    assert_eq!(actual.id, expected.id, "wrong id");
    assert_eq!(actual.name, expected.name, "wrong name");
    assert_eq!(actual.surname, expected.surname, "wrong surname");
    assert_eq!(actual.birth_date, expected.birth_date, "wrong birth_date");
    assert_eq!(actual.join_date, expected.join_date, "wrong join_date");
    assert_eq!(actual.salary, expected.salary, "wrong salary");
    assert_eq!(actual.country, expected.country, "wrong country");
    assert_eq!(actual.image, expected.image, "wrong image");
    assert_eq!(actual.role, expected.role, "wrong role");
}

pub async fn memory_pool() -> SqlitePool {
    database::open("sqlite::memory:", true).await.unwrap()
}

pub async fn memory_service_with_cache(capacity: usize, ttl: Duration) -> TestService {
    let storage = Arc::new(FileSystemRosterStorage::new());
    RosterService::new(
        Arc::new(SqliteMemberRepository::new(memory_pool().await)),
        MemberCache::new(capacity, ttl),
        MemberValidator::new(),
        Arc::clone(&storage),
        storage,
    )
}

pub async fn memory_service() -> TestService {
    memory_service_with_cache(10, Duration::from_secs(60)).await
}

pub async fn memory_users() -> SqliteUserRepository {
    SqliteUserRepository::new(memory_pool().await)
}
