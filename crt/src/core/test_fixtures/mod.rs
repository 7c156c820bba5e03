// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory stand-ins for the terminal, so the state machine, the cursor position
//! protocol and the key poller can be tested without a TTY.
//!
//! - [`MockTermios`]: a [`TermiosBackend`](crate::TermiosBackend) that records calls.
//! - [`ScriptedInput`]: a [`TerminalInput`](crate::TerminalInput) fed from a queue.
//! - [`StdoutMock`] and [`OutputDeviceExt::new_mock()`]: captured output.
//!
//! The PTY fixtures (`generate_pty_test!`) are only compiled for this crate's own tests.

// Attach.
pub mod input_device_fixtures;
pub mod output_device_fixtures;
pub mod termios_fixtures;

#[cfg(all(unix, test))]
pub mod pty_test_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
pub use termios_fixtures::*;

#[cfg(all(unix, test))]
pub use pty_test_fixtures::*;
