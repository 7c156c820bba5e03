// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr TCSADRAIN cfmakeraw VMIN VTIME

//! Terminal raw mode state machine.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+D, etc.)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - all bytes pass through
//! - No echo - typed characters don't automatically appear
//! - Needed to read the terminal's reply to `ESC[6n`, and to poll for single keys
//!
//! ## The state machine
//!
//! ```text
//!              raw_on()                         raw_off()
//!   ┌────────┐ capture + make_raw ┌───────────┐ restore saved (TCSADRAIN) ┌────────┐
//!   │ cooked ├───────────────────▶│    raw    ├──────────────────────────▶│ cooked │
//!   │ saved: │                    │ saved:    │                           │ saved: │
//!   │  None  │◀─── raw_on() ──┐   │  Some(..) │◀── raw_on() (no-op)       │  None  │
//!   └────────┘   raw_off()    │   └───────────┘                           └────────┘
//!        ▲       (no-op)      │
//!        └────────────────────┘
//! ```
//!
//! [`TerminalModeController`] owns this state. "Is raw" and "has a saved configuration"
//! are the same fact, so they are stored as one `Option`. The controller also captures
//! the configuration at construction time, and restores it when dropped while raw.
//!
//! There are two scoped ways to be in raw mode:
//!
//! | Scope                | Visible via `is_raw()`? | Used by                         |
//! | :------------------- | :---------------------- | :------------------------------ |
//! | [`RawModeGuard`]     | yes                     | application code that polls keys |
//! | [`RawModeExcursion`] | no                      | the cursor position query       |
//!
//! Both restore the prior configuration when dropped, on every exit path.
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: [`StdinTermios`] uses rustix's safe termios API on stdin.
//! - Everything else talks to a [`TermiosBackend`], so tests use
//!   [`MockTermios`](crate::MockTermios).
//!
//! ## Usage Example
//!
//! ```no_run
//! use r3bl_crt::{RawModeGuard, StdinTermios, TerminalModeController};
//!
//! # fn main() -> r3bl_crt::CrtResult<()> {
//! let mut controller = TerminalModeController::new(StdinTermios)?;
//! {
//!     let guard = RawModeGuard::new(&mut controller)?;
//!     assert!(guard.is_raw());
//!     // ... read bytes one at a time ...
//! } // Raw mode automatically disabled when guard is dropped.
//! assert!(!controller.is_raw());
//! # Ok(())
//! # }
//! ```

// Private modules (hide internal structure).
mod raw_mode_core;
mod raw_mode_guard;
mod termios_backend;

#[cfg(unix)]
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use raw_mode_guard::*;
pub use termios_backend::*;

#[cfg(unix)]
pub use raw_mode_unix::*;

// PTY based integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
