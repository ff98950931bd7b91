use std::path::PathBuf;

use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind};

/// Application-level error returned by the room layer, configuration and
/// dictionary loading. Rule violations inside a turn never surface here; they
/// are reported as [`crate::domain::CommandOutcome`] values.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Dictionary error ({}): {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable SCREAMING_SNAKE_CASE code for logs and outer layers.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Validation(..)) => "VALIDATION_ERROR",
            AppError::Domain(DomainError::Conflict(..)) => "CONFLICT",
            AppError::Domain(DomainError::NotFound(NotFoundKind::Room, _)) => "ROOM_NOT_FOUND",
            AppError::Domain(DomainError::NotFound(NotFoundKind::Player, _)) => {
                "PLAYER_NOT_FOUND"
            }
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Dictionary { .. } => "DICTIONARY_ERROR",
        }
    }
}
