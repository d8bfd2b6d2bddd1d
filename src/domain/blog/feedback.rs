// src/domain/blog/feedback.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::blog::value_objects::{BlogId, FeedbackId};
use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPolarity {
    Positive,
    Negative,
}

impl FeedbackPolarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for FeedbackPolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackPolarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            other => Err(DomainError::Validation(format!(
                "unknown feedback polarity: {other}"
            ))),
        }
    }
}

/// A user reaction to a blog, recorded once and never edited.
#[derive(Debug, Clone)]
pub struct FeedbackEvent {
    pub id: FeedbackId,
    pub blog_id: BlogId,
    pub content: String,
    pub polarity: FeedbackPolarity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFeedbackEvent {
    pub id: FeedbackId,
    pub blog_id: BlogId,
    pub content: String,
    pub polarity: FeedbackPolarity,
    pub created_at: DateTime<Utc>,
}
