// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr cfmakeraw TCSADRAIN

//! Unix/Linux/macOS implementation of [`TermiosBackend`] using rustix's safe termios
//! API.

use crate::{CrtError, CrtResult, TermiosBackend};
use rustix::termios::{self, OptionalActions, Termios};
use std::io;

/// [`TermiosBackend`] for the terminal connected to the process's standard input.
///
/// There is deliberately no `/dev/tty` fallback: key polling and the cursor position
/// reply are both read from stdin, so if stdin is not a terminal there is nothing useful
/// to put in raw mode, and every call fails with [`CrtError::TerminalUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinTermios;

impl TermiosBackend for StdinTermios {
    type Snapshot = Termios;

    fn capture(&mut self) -> CrtResult<Termios> {
        let stdin = io::stdin();
        termios::tcgetattr(&stdin)
            .map_err(|errno| CrtError::terminal_unavailable("tcgetattr", errno))
    }

    fn apply_raw(&mut self, base: &Termios) -> CrtResult<()> {
        // rustix's Termios doesn't implement Copy, so we need to clone.
        let mut raw = base.clone();

        // Same as cfmakeraw(): no ICANON, ECHO, ISIG, IEXTEN, OPOST, ICRNL, IXON, and
        // VMIN=1, VTIME=0 for byte at a time reads.
        raw.make_raw();

        let stdin = io::stdin();
        termios::tcsetattr(&stdin, OptionalActions::Now, &raw)
            .map_err(|errno| CrtError::terminal_unavailable("tcsetattr", errno))
    }

    fn restore(&mut self, snapshot: &Termios) -> CrtResult<()> {
        // TCSADRAIN: let pending output reach the terminal before the mode switches.
        let stdin = io::stdin();
        termios::tcsetattr(&stdin, OptionalActions::Drain, snapshot)
            .map_err(|errno| CrtError::terminal_unavailable("tcsetattr", errno))
    }
}

/// Whether stdin is connected to a terminal.
#[must_use]
pub fn is_stdin_a_tty() -> bool { termios::isatty(io::stdin()) }
