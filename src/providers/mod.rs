pub mod db;
pub mod fs;
pub mod member_repository;
pub mod roster_reader;
pub mod roster_writer;
pub mod user_repository;
