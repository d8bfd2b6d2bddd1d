pub mod blogs;
pub mod feedback;
pub mod generate;
pub mod users;
pub mod versions;
