// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything in this crate lives under `core`, and is re-exported from the crate root.
//!
//! - [`ansi`]: raw mode, cursor position protocol, key poller, escape sequences.
//! - [`common`]: errors, deadlines, fast string building, miette report hook.
//! - [`crt`]: the [`Crt`] context object and its [`CrtConfig`].
//! - [`log`]: tracing subscriber setup.
//! - [`terminal_io`]: input and output devices.
//! - [`test_fixtures`]: in-memory stand-ins for the terminal, for tests.

// Connect to source file.
pub mod ansi;
pub mod common;
pub mod crt;
pub mod log;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use crt::*;
pub use log::*;
pub use terminal_io::*;
pub use test_fixtures::*;
