pub mod dto;
pub mod enums;
pub mod member;
pub mod settings;
pub mod user;
