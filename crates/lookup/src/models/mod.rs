//! Lookup models
//!
//! This module contains the core data types shared by providers and the race:
//! - `types` - Type aliases for common identifiers (ProviderId)
//! - `postal_code` - The lookup key (PostalCode)
//! - `address` - Provider-specific payloads (ViaCepAddress, ApiCepAddress, ProviderPayload)

mod address;
mod postal_code;
mod types;

pub use address::{ApiCepAddress, ProviderPayload, ViaCepAddress};
pub use postal_code::{PostalCode, SEPARATOR};
pub use types::ProviderId;
