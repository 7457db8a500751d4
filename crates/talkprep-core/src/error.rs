//! Error types for the TalkPrep library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire TalkPrep library.
///
/// Only three failure modes exist in the system: invalid configuration,
/// operating on a workflow before it was initialized, and requesting an
/// artifact whose predecessor has not been produced yet. Advisory
/// validation results (timing warnings, content suggestions) are not
/// errors and never appear here.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TalkPrepError {
    /// One or more configuration fields failed validation.
    ///
    /// The message aggregates every violated constraint; validation is
    /// never reported partially.
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),

    /// An operation was invoked before a session was initialized.
    #[error("Session not initialized. Call initialize first.")]
    SessionNotInitialized,

    /// An operation's required predecessor artifact is absent.
    #[error("{artifact} required before this step. Generate it first.")]
    MissingArtifact {
        /// Human-readable artifact name ("Outline", "Script", ...).
        artifact: String,
    },
}

impl TalkPrepError {
    /// Creates a ConfigurationInvalid error from a list of field-level
    /// violation messages, joined into a single aggregated string.
    pub fn configuration_invalid(errors: &[String]) -> Self {
        Self::ConfigurationInvalid(errors.join("; "))
    }

    /// Creates a MissingArtifact error.
    pub fn missing_artifact(artifact: impl Into<String>) -> Self {
        Self::MissingArtifact {
            artifact: artifact.into(),
        }
    }

    /// Check if this is a ConfigurationInvalid error.
    pub fn is_configuration_invalid(&self) -> bool {
        matches!(self, Self::ConfigurationInvalid(_))
    }

    /// Check if this is a SessionNotInitialized error.
    pub fn is_session_not_initialized(&self) -> bool {
        matches!(self, Self::SessionNotInitialized)
    }

    /// Check if this is a MissingArtifact error.
    pub fn is_missing_artifact(&self) -> bool {
        matches!(self, Self::MissingArtifact { .. })
    }
}

/// A type alias for `Result<T, TalkPrepError>`.
pub type Result<T> = std::result::Result<T, TalkPrepError>;
