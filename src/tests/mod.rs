mod fixtures;

mod cli_tests;
mod member_repository_tests;
mod user_repository_tests;
