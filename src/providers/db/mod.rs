pub mod database;
pub mod member_repository;
pub mod member_row;
pub mod user_repository;
