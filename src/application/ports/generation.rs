// src/application/ports/generation.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::error::ApplicationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Gateway to the hosted text-generation service. One attempt per call; no
/// retry or rate-limit policy lives behind this trait.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, messages: &[ChatMessage]) -> ApplicationResult<String>;
}
