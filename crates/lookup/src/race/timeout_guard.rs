//! Race-wide deadline.
//!
//! A guard is armed when the race launches and fires at most once. If the
//! race resolves first the guard is disarmed and its timer is simply dropped.

use std::time::Duration;

use tokio::time::Instant;

/// Timeout guard state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GuardState {
    /// Deadline pending.
    Armed,
    /// Deadline elapsed (terminal).
    Fired,
    /// Race resolved before the deadline (terminal).
    Disarmed,
}

impl std::fmt::Display for GuardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Armed => write!(f, "Armed"),
            Self::Fired => write!(f, "Fired"),
            Self::Disarmed => write!(f, "Disarmed"),
        }
    }
}

/// One-shot deadline for a whole race.
#[derive(Debug)]
pub struct TimeoutGuard {
    duration: Duration,
    deadline: Instant,
    state: GuardState,
}

impl TimeoutGuard {
    /// Arm a guard that fires `duration` from now.
    pub fn after(duration: Duration) -> Self {
        Self {
            duration,
            deadline: Instant::now() + duration,
            state: GuardState::Armed,
        }
    }

    /// Configured duration, as given to [`after`](Self::after).
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Time left before the guard fires. Zero once elapsed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Wait for the deadline.
    ///
    /// Cancel-safe: the deadline is fixed at arm time, so dropping this
    /// future and calling again does not push it back. Returns immediately
    /// once fired; never returns on a disarmed guard.
    pub async fn fired(&mut self) {
        match self.state {
            GuardState::Fired => {}
            GuardState::Disarmed => std::future::pending::<()>().await,
            GuardState::Armed => {
                tokio::time::sleep_until(self.deadline).await;
                self.state = GuardState::Fired;
            }
        }
    }

    /// Stand the guard down after the race resolved. No-op once fired.
    pub fn disarm(&mut self) {
        if self.state == GuardState::Armed {
            self.state = GuardState::Disarmed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fires_after_duration() {
        let mut guard = TimeoutGuard::after(Duration::from_millis(50));
        assert_eq!(guard.state(), GuardState::Armed);

        let start = std::time::Instant::now();
        guard.fired().await;
        assert!(start.elapsed() >= Duration::from_millis(45));
        assert_eq!(guard.state(), GuardState::Fired);
        assert_eq!(guard.remaining(), Duration::ZERO);

        // Already fired: resolves immediately
        let start = std::time::Instant::now();
        guard.fired().await;
        assert!(start.elapsed() < Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_disarmed_guard_never_fires() {
        let mut guard = TimeoutGuard::after(Duration::from_millis(10));
        guard.disarm();
        assert_eq!(guard.state(), GuardState::Disarmed);

        let waited = tokio::time::timeout(Duration::from_millis(100), guard.fired()).await;
        assert!(waited.is_err());
        assert_eq!(guard.state(), GuardState::Disarmed);
    }

    #[tokio::test]
    async fn test_disarm_after_fire_is_noop() {
        let mut guard = TimeoutGuard::after(Duration::from_millis(5));
        guard.fired().await;
        guard.disarm();
        assert_eq!(guard.state(), GuardState::Fired);
    }

    #[tokio::test]
    async fn test_deadline_is_fixed_at_arm_time() {
        let mut guard = TimeoutGuard::after(Duration::from_millis(80));
        let start = std::time::Instant::now();

        // Poll and drop the wait a few times; the deadline must not move.
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(20), guard.fired()).await;
        }
        guard.fired().await;

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(75));
        assert!(elapsed < Duration::from_millis(300));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(GuardState::Armed.to_string(), "Armed");
        assert_eq!(GuardState::Fired.to_string(), "Fired");
        assert_eq!(GuardState::Disarmed.to_string(), "Disarmed");
    }

    #[tokio::test]
    async fn test_duration_and_remaining() {
        let guard = TimeoutGuard::after(Duration::from_secs(1));
        assert_eq!(guard.duration(), Duration::from_secs(1));
        assert!(guard.remaining() <= Duration::from_secs(1));
        assert!(guard.remaining() > Duration::from_millis(900));
    }
}
