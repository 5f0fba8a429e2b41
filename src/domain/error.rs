//! Error types for balance lookups and wallet operations.

use thiserror::Error;

// ============================================================================
// Fetch Errors
// ============================================================================

/// Failure of an account summary fetch.
///
/// Every failure of the indexer round trip lands in one of these variants;
/// callers never see partially parsed data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent, or the server answered with a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The caller supplied unusable input, so no request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FetchError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::parse(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

// ============================================================================
// Operation Errors
// ============================================================================

/// Failure to build or forward a wallet operation.
#[derive(Debug, Error)]
pub enum OperationError {
    /// No operation is registered under the given key.
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    /// A required form field was absent or blank.
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The form field id.
        field: &'static str,
    },

    /// The wallet agent rejected or failed the call.
    #[error("{0}")]
    Agent(String),
}

impl OperationError {
    #[cfg(test)]
    #[must_use]
    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
