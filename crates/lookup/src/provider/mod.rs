//! Address provider abstractions and implementations.
//!
//! This module contains:
//! - The `AddressProvider` trait that all providers implement
//! - A small HTTP helper shared by the concrete providers
//! - Concrete provider implementations (ViaCEP, ApiCEP)
//!
//! # Key Normalization
//!
//! Providers receive the same [`PostalCode`](crate::models::PostalCode) and
//! each one decides which representation goes on the wire. ViaCEP wants
//! digits only, ApiCEP wants the hyphenated form. Nothing upstream of the
//! provider transforms the key.

mod http;
mod traits;

pub mod apicep;
pub mod viacep;

pub use traits::AddressProvider;
