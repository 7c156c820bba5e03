// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// How long [`Crt`] waits for the terminal.
///
/// ```rust
/// use r3bl_crt::CrtConfig;
/// use std::time::Duration;
///
/// let config = CrtConfig::default().with_cursor_query_timeout(Duration::from_millis(250));
/// assert_eq!(config.key_poll_wait, Duration::from_millis(1));
/// ```
///
/// [`Crt`]: crate::Crt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrtConfig {
    /// Upper bound on the wait for the reply to `ESC[6n`.
    pub cursor_query_timeout: Duration,
    /// How long [`Crt::pend_key()`] waits for input before answering `false`.
    ///
    /// [`Crt::pend_key()`]: crate::Crt::pend_key
    pub key_poll_wait: Duration,
}

impl CrtConfig {
    pub const DEFAULT_CURSOR_QUERY_TIMEOUT: Duration = Duration::from_secs(1);
    pub const DEFAULT_KEY_POLL_WAIT: Duration = Duration::from_millis(1);

    #[must_use]
    pub fn with_cursor_query_timeout(mut self, timeout: Duration) -> Self {
        self.cursor_query_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_key_poll_wait(mut self, wait: Duration) -> Self {
        self.key_poll_wait = wait;
        self
    }
}

impl Default for CrtConfig {
    fn default() -> Self {
        Self {
            cursor_query_timeout: Self::DEFAULT_CURSOR_QUERY_TIMEOUT,
            key_poll_wait: Self::DEFAULT_KEY_POLL_WAIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builders_override_one_field_each() {
        let config = CrtConfig::default()
            .with_cursor_query_timeout(Duration::from_millis(10))
            .with_key_poll_wait(Duration::ZERO);
        assert_eq!(
            config,
            CrtConfig {
                cursor_query_timeout: Duration::from_millis(10),
                key_poll_wait: Duration::ZERO,
            }
        );
    }
}
