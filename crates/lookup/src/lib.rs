//! cepfinder lookup crate
//!
//! Resolves a Brazilian postal code (CEP) by racing independent address
//! providers and keeping whichever answers first, bounded by one deadline.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    Dispatcher    |  (validates input, builds PostalCode)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | RaceCoordinator  | <-- |  TimeoutGuard    |  (single race deadline)
//! +------------------+     +------------------+
//!     |          |
//!     v          v
//! +--------+ +--------+
//! | ViaCEP | | ApiCEP |  (one task each, first success wins)
//! +--------+ +--------+
//! ```
//!
//! # Core Types
//!
//! - [`PostalCode`] - The lookup key; each provider picks its own wire format
//! - [`ProviderPayload`] - Provider-specific address payload
//! - [`RaceWinner`] - The first successful payload and who produced it
//! - [`AllFailedPolicy`] - Timeout (default) or early failure when nobody succeeds

pub mod dispatch;
pub mod errors;
pub mod models;
pub mod provider;
pub mod race;

pub use dispatch::Dispatcher;
pub use errors::{DispatchError, InputError, ProviderError, RaceError};
pub use models::{ApiCepAddress, PostalCode, ProviderId, ProviderPayload, ViaCepAddress};
pub use provider::apicep::ApiCepProvider;
pub use provider::viacep::ViaCepProvider;
pub use provider::AddressProvider;
pub use race::{
    AllFailedPolicy, GuardState, RaceCoordinator, RaceWinner, TimeoutGuard, DEFAULT_DEADLINE,
};
