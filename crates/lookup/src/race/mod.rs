//! Race module.
//!
//! This module runs every provider concurrently and keeps the first success:
//! - `RaceCoordinator` - launches providers and selects the winner
//! - `TimeoutGuard` - single deadline for the whole race
//! - `AllFailedPolicy` - what to report when no provider succeeds

mod coordinator;
mod outcome;
mod timeout_guard;

pub use coordinator::{RaceCoordinator, DEFAULT_DEADLINE};
pub use outcome::{AllFailedPolicy, RaceWinner};
pub use timeout_guard::{GuardState, TimeoutGuard};
