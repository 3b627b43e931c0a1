//! Race coordinator for concurrent provider lookups.
//!
//! Every provider runs as its own task. Successful lookups are published to
//! a bounded completion channel; the first value read wins. Failures are
//! logged and never published. A single [`TimeoutGuard`] bounds the wait.
//!
//! Losing tasks are never aborted. They run to completion and their result
//! is dropped: the channel holds one slot per provider and publishing uses
//! `try_send`, so a loser never blocks on a reader that has gone away.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::outcome::{AllFailedPolicy, RaceWinner};
use super::timeout_guard::TimeoutGuard;
use crate::errors::RaceError;
use crate::models::{PostalCode, ProviderId, ProviderPayload};
use crate::provider::AddressProvider;

/// Default race deadline.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(1);

/// Races address providers against each other and a deadline.
pub struct RaceCoordinator {
    providers: Vec<Arc<dyn AddressProvider>>,
    deadline: Duration,
    all_failed: AllFailedPolicy,
}

impl RaceCoordinator {
    /// Create a coordinator with the default policy.
    ///
    /// # Arguments
    ///
    /// * `providers` - Providers to race; all of them are launched on every race
    /// * `deadline` - Upper bound on the whole race, measured from launch
    pub fn new(providers: Vec<Arc<dyn AddressProvider>>, deadline: Duration) -> Self {
        Self {
            providers,
            deadline,
            all_failed: AllFailedPolicy::default(),
        }
    }

    /// Choose what to report when every provider fails.
    pub fn with_all_failed_policy(mut self, policy: AllFailedPolicy) -> Self {
        self.all_failed = policy;
        self
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn all_failed_policy(&self) -> AllFailedPolicy {
        self.all_failed
    }

    /// Run one race for `key`.
    ///
    /// Returns the first payload published by any provider. There is no
    /// priority between providers: simultaneous successes are resolved by
    /// whichever the channel yields first.
    pub async fn race(&self, key: &PostalCode) -> Result<RaceWinner, RaceError> {
        if self.providers.is_empty() {
            warn!("No providers configured, nothing to race for {}", key);
            return Err(RaceError::NoProvidersAvailable);
        }

        let started = Instant::now();
        let mut guard = TimeoutGuard::after(self.deadline);
        let (tx, mut rx) = mpsc::channel::<(ProviderId, ProviderPayload)>(self.providers.len());

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            let key = key.clone();

            // Detached on purpose: the handle is dropped, the task keeps running.
            tokio::spawn(async move {
                let id = provider.id();
                match provider.lookup(&key).await {
                    Ok(payload) => {
                        if tx.try_send((id, payload)).is_err() {
                            debug!("{} answered after the race for {} was decided", id, key);
                        }
                    }
                    Err(e) => warn!("{} lookup failed for {}: {}", id, key, e),
                }
            });
        }
        // Only the tasks hold senders now; the channel closes when all of them exit.
        drop(tx);

        debug!(
            "Racing {} providers for {} (deadline {:?})",
            self.providers.len(),
            key,
            self.deadline
        );

        let mut channel_open = true;
        loop {
            tokio::select! {
                received = rx.recv(), if channel_open => match received {
                    Some((provider, payload)) => {
                        guard.disarm();
                        let elapsed = started.elapsed();
                        info!("{} won the race for {} in {:?}", provider, key, elapsed);
                        return Ok(RaceWinner {
                            provider,
                            payload,
                            elapsed,
                        });
                    }
                    None => match self.all_failed {
                        AllFailedPolicy::FailFast => {
                            warn!("Every provider failed for {}", key);
                            return Err(RaceError::AllProvidersFailed);
                        }
                        AllFailedPolicy::AwaitDeadline => {
                            debug!(
                                "Every provider failed for {}, waiting {:?} for the deadline",
                                key,
                                guard.remaining()
                            );
                            channel_open = false;
                        }
                    },
                },
                _ = guard.fired() => {
                    warn!("Race for {} timed out after {:?}", key, self.deadline);
                    return Err(RaceError::Timeout(self.deadline));
                }
            }
        }
    }
}
