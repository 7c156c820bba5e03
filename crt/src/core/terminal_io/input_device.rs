// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level input. See [`TerminalInput`].

use std::{io, time::Duration};

/// The two input primitives that key polling and the cursor position protocol are built
/// from.
///
/// Implementations must not buffer ahead of what [`read_byte()`] returns, otherwise
/// [`poll_readable()`] would report "nothing pending" while bytes sit in a userspace
/// buffer.
///
/// [`read_byte()`]: Self::read_byte
/// [`poll_readable()`]: Self::poll_readable
pub trait TerminalInput {
    /// Wait up to `timeout` for at least one byte to be readable. Returns `Ok(false)` if
    /// the wait ended without input (including being interrupted by a signal).
    ///
    /// # Errors
    ///
    /// Returns an error if the readiness check itself fails, or if the input is in an
    /// error state (e.g. a closed file descriptor).
    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Block until one byte is available, and return it.
    ///
    /// # Errors
    ///
    /// [`io::ErrorKind::UnexpectedEof`] if the input is closed, or any read error.
    fn read_byte(&mut self) -> io::Result<u8>;
}

#[cfg(unix)]
mod unix_impl {
    use super::{Duration, TerminalInput, io};
    use rustix::{event::{PollFd, PollFlags, Timespec, poll},
                 io::Errno};

    /// [`TerminalInput`] over the process's standard input file descriptor.
    ///
    /// Reads go straight to the fd with `read(2)`, one byte at a time, bypassing
    /// [`std::io::Stdin`]'s internal buffer. Readiness uses level-triggered `poll(2)`,
    /// so every pending byte keeps stdin readable until it is consumed.
    #[derive(Debug)]
    pub struct StdinInput {
        stdin: io::Stdin,
    }

    impl Default for StdinInput {
        fn default() -> Self {
            Self {
                stdin: io::stdin(),
            }
        }
    }

    impl StdinInput {
        #[must_use]
        pub fn new() -> Self { Self::default() }
    }

    fn to_timespec(duration: Duration) -> Timespec {
        Timespec {
            tv_sec: i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
            tv_nsec: i64::from(duration.subsec_nanos()),
        }
    }

    /// HUP counts as readable so that the next read reports EOF. `NVAL` (fd not open) and
    /// `ERR` without pending input are errors, not "nothing to read".
    fn readiness(revents: PollFlags) -> io::Result<bool> {
        if revents.contains(PollFlags::NVAL) {
            return Err(Errno::BADF.into());
        }
        if revents.intersects(PollFlags::IN | PollFlags::HUP) {
            return Ok(true);
        }
        if revents.contains(PollFlags::ERR) {
            return Err(io::Error::other("error condition on stdin"));
        }
        Ok(false)
    }

    impl TerminalInput for StdinInput {
        fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
            let timeout = to_timespec(timeout);
            let mut fds = [PollFd::new(&self.stdin, PollFlags::IN)];
            match poll(&mut fds, Some(&timeout)) {
                Ok(0) | Err(Errno::INTR) => Ok(false),
                Ok(_) => readiness(fds[0].revents()),
                Err(errno) => Err(errno.into()),
            }
        }

        fn read_byte(&mut self) -> io::Result<u8> {
            let mut buf = [0_u8; 1];
            loop {
                match rustix::io::read(&self.stdin, &mut buf[..]) {
                    Ok(0) => {
                        return Err(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "stdin closed",
                        ));
                    }
                    Ok(_) => return Ok(buf[0]),
                    Err(Errno::INTR) => {}
                    Err(errno) => return Err(errno.into()),
                }
            }
        }
    }

}

#[cfg(unix)]
pub use unix_impl::*;
