//! Address provider trait definitions.

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{PostalCode, ProviderPayload};

/// Trait for postal code providers.
///
/// Implement this trait to add another CEP data source to the race.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use cepfinder_lookup::provider::AddressProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl AddressProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn lookup(&self, key: &PostalCode) -> Result<ProviderPayload, ProviderError> {
///         // one outbound request, no retries
///     }
/// }
/// ```
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "VIACEP" or "APICEP".
    /// Used for logging and to tag the race winner.
    fn id(&self) -> &'static str;

    /// Representation of the key this provider expects on the wire.
    ///
    /// Defaults to the hyphenated form as entered by the user.
    fn format_key(&self, key: &PostalCode) -> String {
        key.hyphenated().to_string()
    }

    /// Look up a postal code.
    ///
    /// Issues exactly one outbound request. Every failure is returned to the
    /// caller, including a provider-reported "not found".
    async fn lookup(&self, key: &PostalCode) -> Result<ProviderPayload, ProviderError>;
}
