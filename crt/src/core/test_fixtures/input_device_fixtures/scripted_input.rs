// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StdMutex, TerminalInput};
use std::{collections::VecDeque,
          io,
          sync::{Arc, MutexGuard, PoisonError},
          time::Duration};

#[derive(Debug, Default)]
struct ScriptedInputState {
    pending: VecDeque<u8>,
    poll_count: usize,
    read_count: usize,
    closed: bool,
}

/// [`TerminalInput`] that hands out bytes queued ahead of time.
///
/// You can safely clone this struct, the clones share the same queue and counters. Give
/// one clone to the code under test and keep another to push more bytes and make
/// assertions.
///
/// - [`poll_readable()`] returns `true` when the queue is non empty. When it is empty it
///   sleeps for the whole timeout (like a quiet terminal would) and returns `false`.
/// - [`read_byte()`] pops the next byte. On an empty queue it returns
///   [`io::ErrorKind::UnexpectedEof`] instead of blocking forever.
///
/// [`poll_readable()`]: TerminalInput::poll_readable
/// [`read_byte()`]: TerminalInput::read_byte
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    state: Arc<StdMutex<ScriptedInputState>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        let it = Self::new();
        it.push_bytes(bytes);
        it
    }

    fn lock(&self) -> MutexGuard<'_, ScriptedInputState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push_bytes(&self, bytes: impl AsRef<[u8]>) {
        self.lock().pending.extend(bytes.as_ref());
    }

    /// Make [`TerminalInput::poll_readable()`] fail from now on, like a revoked fd.
    pub fn close(&self) { self.lock().closed = true; }

    /// Bytes that have not been read yet.
    #[must_use]
    pub fn remaining(&self) -> Vec<u8> { self.lock().pending.iter().copied().collect() }

    #[must_use]
    pub fn poll_count(&self) -> usize { self.lock().poll_count }

    #[must_use]
    pub fn read_count(&self) -> usize { self.lock().read_count }
}

impl TerminalInput for ScriptedInput {
    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        let has_bytes = {
            let mut state = self.lock();
            state.poll_count += 1;
            if state.closed {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            !state.pending.is_empty()
        };
        if !has_bytes {
            std::thread::sleep(timeout);
        }
        Ok(has_bytes)
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut state = self.lock();
        state.read_count += 1;
        state
            .pending
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_in_order_and_counts() {
        let mut input = ScriptedInput::from_bytes(b"ab");
        let observer = input.clone();

        assert!(input.poll_readable(Duration::ZERO).unwrap());
        assert_eq!(input.read_byte().unwrap(), b'a');
        assert_eq!(input.read_byte().unwrap(), b'b');

        assert_eq!(observer.read_count(), 2);
        assert_eq!(observer.poll_count(), 1);
        assert_eq!(observer.remaining(), Vec::<u8>::new());
    }

    #[test]
    fn test_empty_poll_waits_and_returns_false() {
        let mut input = ScriptedInput::new();
        let start = std::time::Instant::now();
        assert!(!input.poll_readable(Duration::from_millis(5)).unwrap());
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_exhausted_read_is_eof() {
        let mut input = ScriptedInput::new();
        let error = input.read_byte().unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_closed_poll_fails() {
        let mut input = ScriptedInput::from_bytes(b"x");
        input.close();
        assert!(input.poll_readable(Duration::ZERO).is_err());
    }
}
