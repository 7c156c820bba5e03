// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

/// A point in time after which a bounded wait gives up.
///
/// Used by the cursor position protocol to turn "read until `R`" into "read until `R`
/// or until the deadline expires", by passing [`remaining()`] as the timeout of each
/// individual wait.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use r3bl_crt::Deadline;
///
/// let deadline = Deadline::new(Duration::from_secs(10));
/// assert!(deadline.has_time_remaining());
/// assert!(deadline.remaining().is_some());
/// ```
///
/// A timeout too large to add to [`Instant::now()`] (like [`Duration::MAX`]) never
/// expires, and [`remaining()`] keeps returning that timeout.
///
/// [`remaining()`]: Self::remaining
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    /// [`None`] when the timeout overflows [`Instant`].
    expires_at: Option<Instant>,
    timeout: Duration,
}

impl Default for Deadline {
    /// 5 seconds.
    fn default() -> Self { Self::new(Duration::from_secs(5)) }
}

impl Deadline {
    /// Creates a new deadline that expires after the given duration.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(timeout),
            timeout,
        }
    }

    /// Returns `true` if the deadline has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    /// Inverse of [`is_expired()`](Self::is_expired).
    #[must_use]
    pub fn has_time_remaining(&self) -> bool { !self.is_expired() }

    /// Time left before the deadline expires, or [`None`] once it has.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        match self.expires_at {
            Some(expires_at) => expires_at
                .checked_duration_since(Instant::now())
                .filter(|it| !it.is_zero()),
            None => Some(self.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_deadline_has_time_remaining() {
        let deadline = Deadline::new(Duration::from_secs(10));
        assert!(deadline.has_time_remaining());
        assert!(!deadline.is_expired());
        let remaining = deadline.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(10));
    }

    #[test]
    fn test_expired_deadline_has_nothing_remaining() {
        let deadline = Deadline::new(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), None);
    }

    #[test]
    fn test_zero_timeout_is_expired_immediately() {
        let deadline = Deadline::new(Duration::ZERO);
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), None);
    }

    #[test]
    fn test_overflowing_timeout_never_expires() {
        let deadline = Deadline::new(Duration::MAX);
        assert!(deadline.has_time_remaining());
        assert_eq!(deadline.remaining(), Some(Duration::MAX));
    }
}
