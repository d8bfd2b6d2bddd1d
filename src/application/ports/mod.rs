pub mod generation;
pub mod time;
