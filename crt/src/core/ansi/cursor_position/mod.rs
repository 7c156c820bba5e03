// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor position protocol.
//!
//! ```text
//!  application                          terminal
//!      │ ── ESC [ 6 n ──────────────────────▶ │   (output device)
//!      │ ◀── ESC [ row ; col R ────────────── │   (input, one byte at a time)
//! ```
//!
//! The reply arrives on stdin, so it can only be read without waiting for Enter (and
//! without being echoed) while the terminal is in raw mode. [`query_cursor_position()`]
//! takes care of that with a scoped [`RawModeExcursion`] when needed.
//!
//! [`RawModeExcursion`]: crate::RawModeExcursion

// Attach.
mod cursor_position_report;
mod cursor_query;

// Re-export.
pub use cursor_position_report::*;
pub use cursor_query::*;
