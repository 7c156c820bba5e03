// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr TCSADRAIN clrscr clreol oflush

//! # `r3bl_crt`
//!
//! A small console resource toolkit for programs that want to drive an ANSI / VT100
//! terminal directly, without a full TUI framework. It gives you:
//!
//! 1. **Raw mode** on and off, with the original terminal configuration restored
//!    reliably (explicitly, via RAII guards, and best-effort on drop).
//! 2. **Cursor position queries** (`ESC[6n` → `ESC[row;colR`), including a scoped raw
//!    mode excursion when the terminal is in cooked mode, and a bounded wait so a
//!    terminal that never answers can't hang your program.
//! 3. **Key polling**: "is a key pending?" with a ~1ms bounded wait, and a blocking
//!    single byte read. Both require raw mode.
//! 4. Small **escape sequence helpers**: cursor movement, clear screen / line, hide and
//!    show cursor, and SGR colors and styles.
//!
//! Everything hangs off one explicit context object, [`Crt`], instead of process wide
//! globals.
//!
//! ```no_run
//! use r3bl_crt::{Color, Crt, StdinCrt};
//!
//! # fn main() -> r3bl_crt::CrtResult<()> {
//! let mut crt = Crt::new()?;
//! crt.clrscr()?;
//! crt.goto_xy(10, 5)?;
//! crt.text_color(Color::Red)?;
//! crt.set_bold(true)?;
//! crt.write_str("hello")?;
//! crt.format_reset()?;
//!
//! let position = crt.cursor_position()?;
//! crt.write_str(&format!(" <- row {}, col {}", position.row, position.col))?;
//! crt.oflush()?;
//!
//! crt.raw_on()?;
//! loop {
//!     if crt.pend_key()? && crt.read_key()? == b'q' {
//!         break;
//!     }
//!     StdinCrt::delay(10);
//! }
//! crt.raw_off()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────── Crt ────────────────────────────────┐
//! │                                                                     │
//! │  TerminalModeController ◀── raw_on / raw_off / is_raw               │
//! │      │  (TermiosBackend: tcgetattr / make_raw / tcsetattr)          │
//! │      │                                                              │
//! │      ├──▶ RawModeExcursion ◀── query_cursor_position()              │
//! │      │        (scoped, restored on drop)    │                       │
//! │      │                                      ├──▶ OutputDevice ESC[6n│
//! │      │                                      └──▶ TerminalInput      │
//! │      │                                                              │
//! │      └──▶ is_raw() precondition ◀── has_pending_key() / read_key()  │
//! │                                                                     │
//! │  FormatState + CsiSequence ──▶ OutputDevice (SGR, cursor, clear)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Platform support
//!
//! The production backends ([`StdinTermios`], [`StdinInput`]) are Unix only (termios
//! via [`rustix`]). The state machine, the protocol, and the escape sequence
//! generators are platform independent and are tested with in-memory fixtures in
//! [`crate::core::test_fixtures`].
//!
//! [`rustix`]: rustix

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
