// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that talks ANSI / VT100 to the terminal.
//!
//! - [`terminal_raw_mode`]: the cooked / raw state machine.
//! - [`cursor_position`]: the `ESC[6n` query and its `ESC[row;colR` reply.
//! - [`key_poller`]: "is a key pending?" and single byte reads, in raw mode.
//! - [`generator`] and [`constants`]: the escape sequences that are written out.
//! - [`color`]: the 8 color palette.

// Attach.
pub mod color;
pub mod constants;
pub mod cursor_position;
pub mod generator;
pub mod key_poller;
pub mod terminal_raw_mode;

// Re-export.
pub use color::*;
pub use constants::*;
pub use cursor_position::*;
pub use generator::*;
pub use key_poller::*;
pub use terminal_raw_mode::*;
