pub mod database;
pub mod generation;
pub mod repositories;
pub mod time;
