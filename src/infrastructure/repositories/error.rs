// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

/// Translate sqlx failures into domain errors. Unique violations become
/// conflicts so callers can surface them without inspecting driver codes.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::Conflict(db.message().to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DomainError::NotFound(db.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
