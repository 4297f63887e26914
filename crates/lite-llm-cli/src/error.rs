//! CLI-specific error types and mappings.
//!
//! Library errors are folded into [`CliError`] at the command boundary so
//! `main` can pick an exit code.

use lite_llm_core::{ModelServerError, RequirementsError};
use lite_llm_ollama::OllamaError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid flag or argument value.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The host does not meet the deployment requirements.
    #[error(transparent)]
    Requirements(#[from] RequirementsError),

    /// The inference server could not be contacted or refused the request.
    #[error("{0}")]
    Unreachable(String),

    /// The inference server answered with something unusable.
    #[error("{0}")]
    Protocol(String),

    /// Some items of a batch operation failed.
    #[error("{failed} of {total} operations failed")]
    Partial { failed: usize, total: usize },
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General failure
    /// - 2: Invalid arguments
    /// - 69: Service unavailable (EX_UNAVAILABLE)
    /// - 76: Remote protocol error (EX_PROTOCOL)
    /// - 78: Host configuration unsuitable (EX_CONFIG)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Partial { .. } => 1,
            Self::Arguments(_) => 2,
            Self::Unreachable(_) => 69,
            Self::Protocol(_) => 76,
            Self::Requirements(_) => 78,
        }
    }
}

impl From<ModelServerError> for CliError {
    fn from(err: ModelServerError) -> Self {
        if err.is_unreachable() {
            Self::Unreachable(err.to_string())
        } else {
            Self::Protocol(err.to_string())
        }
    }
}

impl From<OllamaError> for CliError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Configuration { .. } => Self::Arguments(err.to_string()),
            _ if err.is_unreachable() => Self::Unreachable(err.to_string()),
            _ => Self::Protocol(err.to_string()),
        }
    }
}

/// Exit code for an error returned from a command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use lite_llm_core::RequirementViolation;

    #[test]
    fn test_server_errors_split_by_class() {
        let unreachable = CliError::from(ModelServerError::NonSuccessStatus { status: 500 });
        assert_eq!(unreachable.exit_code(), 69);

        let protocol = CliError::from(ModelServerError::Decode {
            message: "expected value at line 1 column 1".to_string(),
        });
        assert_eq!(protocol.exit_code(), 76);
    }

    #[test]
    fn test_requirements_error_keeps_message() {
        let err = CliError::from(RequirementsError {
            violations: vec![RequirementViolation::NoSupportedGpu],
        });
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("No supported GPU"));
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = Err::<(), _>(CliError::Unreachable("connection refused".to_string()))
            .context("failed to list models")
            .unwrap_err();
        assert_eq!(exit_code_for(&err), 69);
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
    }
}
