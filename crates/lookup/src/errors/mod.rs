//! Error types for the lookup crate.
//!
//! This module provides:
//! - [`InputError`]: Raw input rejected before any provider is contacted
//! - [`ProviderError`]: A single provider lookup failed (never ends the race)
//! - [`RaceError`]: Race-wide failure surfaced to the caller
//! - [`DispatchError`]: Everything the dispatcher can return

use std::time::Duration;

use thiserror::Error;

/// Errors raised while validating raw user input.
///
/// Detected synchronously, before any provider is launched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No postal code was given.
    #[error("You must provide at least one CEP")]
    MissingPostalCode,

    /// More than one positional argument was given.
    #[error("You must pass only a single CEP (got {0})")]
    TooManyArguments(usize),

    /// The argument has no `-` separator.
    #[error("You must enter a CEP in the format XXXXX-XXX")]
    MissingSeparator,
}

/// Errors that can occur during a single provider lookup.
///
/// These are contained at the adapter boundary: the coordinator logs them
/// and keeps waiting for a sibling provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider that was being called
        provider: String,
        /// The underlying transport message
        message: String,
    },

    /// The provider answered with a status we do not map to a payload.
    #[error("Unexpected status: {provider} - HTTP {status}")]
    UnexpectedStatus {
        /// The provider that answered
        provider: String,
        /// HTTP status code
        status: u16,
    },

    /// The body could not be decoded into the provider's payload shape.
    #[error("Malformed response: {provider} - {message}")]
    MalformedBody {
        /// The provider that answered
        provider: String,
        /// The decoding error
        message: String,
    },

    /// The provider answered successfully but reported the CEP as unknown.
    #[error("CEP not found: {provider} - {cep}")]
    NotFound {
        /// The provider that answered
        provider: String,
        /// The key as sent to the provider
        cep: String,
    },
}

impl ProviderError {
    /// Provider that produced this error.
    pub fn provider(&self) -> &str {
        match self {
            Self::Transport { provider, .. }
            | Self::UnexpectedStatus { provider, .. }
            | Self::MalformedBody { provider, .. }
            | Self::NotFound { provider, .. } => provider,
        }
    }

    /// Whether the provider explicitly said the CEP does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Race-wide errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    /// No provider succeeded before the deadline.
    ///
    /// Under the default policy this is also the outcome when every provider
    /// failed early, since failures never signal the coordinator.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Every provider finished without a payload (fail-fast policy only).
    #[error("All providers failed")]
    AllProvidersFailed,

    /// The coordinator was built without any provider.
    #[error("No providers available")]
    NoProvidersAvailable,
}

/// Errors returned by the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Race(#[from] RaceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_reports_its_name() {
        let error = ProviderError::UnexpectedStatus {
            provider: "VIACEP".to_string(),
            status: 500,
        };
        assert_eq!(error.provider(), "VIACEP");
        assert!(!error.is_not_found());

        let error = ProviderError::NotFound {
            provider: "APICEP".to_string(),
            cep: "00000-000".to_string(),
        };
        assert_eq!(error.provider(), "APICEP");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let error = ProviderError::Transport {
            provider: "VIACEP".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Transport error: VIACEP - connection refused"
        );

        let error = ProviderError::UnexpectedStatus {
            provider: "APICEP".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", error), "Unexpected status: APICEP - HTTP 404");

        let error = RaceError::Timeout(Duration::from_secs(1));
        assert_eq!(format!("{}", error), "Timeout after 1s");

        let error = InputError::TooManyArguments(3);
        assert_eq!(format!("{}", error), "You must pass only a single CEP (got 3)");
    }

    #[test]
    fn test_dispatch_error_is_transparent() {
        let error: DispatchError = InputError::MissingSeparator.into();
        assert_eq!(
            format!("{}", error),
            "You must enter a CEP in the format XXXXX-XXX"
        );

        let error: DispatchError = RaceError::AllProvidersFailed.into();
        assert_eq!(format!("{}", error), "All providers failed");
    }
}
