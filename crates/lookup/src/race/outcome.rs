use std::time::Duration;

use crate::models::{ProviderId, ProviderPayload};

/// What to report when every provider fails before the deadline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AllFailedPolicy {
    /// Keep waiting for the deadline and report a timeout.
    ///
    /// Failures never signal the coordinator, so a race where every
    /// provider failed is indistinguishable from a slow one.
    #[default]
    AwaitDeadline,

    /// Report `RaceError::AllProvidersFailed` as soon as the last
    /// provider finishes without a payload.
    FailFast,
}

/// The first successful lookup of a race.
#[derive(Clone, Debug, PartialEq)]
pub struct RaceWinner {
    /// Provider that produced the payload
    pub provider: ProviderId,
    pub payload: ProviderPayload,
    /// Time from launch until the coordinator observed the payload
    pub elapsed: Duration,
}
