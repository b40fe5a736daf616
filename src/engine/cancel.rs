//! Cooperative cancellation
//!
//! A [`CancellationToken`] is a one-way flag shared between the controller and
//! the running algorithm. Once requested it stays set for the remainder of the
//! run; every run allocates a fresh token.
//!
//! The token doubles as the suspension primitive: [`CancellationToken::wait_timeout`]
//! sleeps for the step delay but wakes as soon as cancellation is requested.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct TokenState {
    requested: Mutex<bool>,
    signal: Condvar,
}

/// Shared cancellation flag with an interruptible wait
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<TokenState>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake every waiter
    pub fn cancel(&self) {
        let mut requested = self
            .inner
            .requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *requested = true;
        self.inner.signal.notify_all();
    }

    /// Check whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        *self
            .inner
            .requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for up to `timeout`, returning early if cancellation is requested.
    ///
    /// Returns `true` when the token is cancelled. A zero timeout only polls.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let requested = self
            .inner
            .requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *requested || timeout.is_zero() {
            return *requested;
        }
        let (requested, _) = self
            .inner
            .signal
            .wait_timeout_while(requested, timeout, |requested| !*requested)
            .unwrap_or_else(PoisonError::into_inner);
        *requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_cancel_is_sticky_and_shared() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        assert!(clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_zero_wait_only_polls() {
        let token = CancellationToken::new();
        assert!(!token.wait_timeout(Duration::ZERO));
        token.cancel();
        assert!(token.wait_timeout(Duration::ZERO));
    }

    #[test]
    fn test_wait_wakes_on_cancel() {
        let token = CancellationToken::new();
        let remote = token.clone();
        let start = Instant::now();

        let waker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            remote.cancel();
        });

        assert!(token.wait_timeout(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(5));
        waker.join().unwrap();
    }

    #[test]
    fn test_wait_times_out_without_cancel() {
        let token = CancellationToken::new();
        assert!(!token.wait_timeout(Duration::from_millis(5)));
    }
}
