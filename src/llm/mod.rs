pub mod client;
pub mod orchestrator;
pub mod prompt;

use thiserror::Error;

/// Substring the Gemini API puts in its error message when the key
/// references a non-existent entity. Matching it is how a rejected
/// credential is told apart from an ordinary remote failure.
pub const NOT_FOUND_MARKER: &str = "Requested entity was not found";

#[derive(Debug, Error)]
pub enum GenerateError {
    /// No credential available before the call was attempted.
    #[error("no API credential configured")]
    CredentialRequired,

    /// The remote rejected the configured credential.
    #[error("credential rejected: {0}")]
    InvalidCredential(String),

    /// Everything else: network, HTTP status, empty or malformed
    /// response, schema violation. Never retried automatically.
    #[error("generation failed: {0}")]
    Generation(String),
}

impl GenerateError {
    /// Failures that route the user back to the key screen.
    pub fn needs_credential(&self) -> bool {
        matches!(
            self,
            GenerateError::CredentialRequired | GenerateError::InvalidCredential(_)
        )
    }
}
