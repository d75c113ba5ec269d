pub mod database_service;
pub mod seed;
pub mod user;
