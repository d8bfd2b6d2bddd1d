mod error;
mod postgres_blog;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_blog::{
    PostgresBlogReadRepository, PostgresBlogWriteRepository, PostgresFeedbackRepository,
    PostgresVersionRepository,
};
pub use postgres_user::PostgresUserRepository;
