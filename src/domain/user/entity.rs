// src/domain/user/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::user::value_objects::{DisplayName, UserId};

/// Owner record referenced by blogs. Credential and session handling live
/// outside this service; blogs hold only a weak reference to the id.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub display_name: DisplayName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub display_name: DisplayName,
    pub created_at: DateTime<Utc>,
}
