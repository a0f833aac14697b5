use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuckError {
    #[error("Failed to construct {what}: {source}")]
    ConstructionFailure {
        what: String,
        #[source]
        source: TryReserveError,
    },
}

impl DuckError {
    pub fn construction(what: impl Into<String>, source: TryReserveError) -> Self {
        DuckError::ConstructionFailure {
            what: what.into(),
            source,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DuckError::ConstructionFailure { what, .. } => {
                format!("Ran out of memory while building the {}", what)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DuckError::ConstructionFailure { .. } => {
                "Free up memory or run a smaller scene (--scene flat)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DuckError>;
