// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 escape sequence constants used by this crate.
//!
//! Constants are grouped by protocol domain:
//! - **csi**: CSI introducer, cursor movement, erase, cursor visibility
//! - **dsr**: Device Status Report request and cursor position response pieces
//! - **sgr**: SGR (Select Graphic Rendition) parameters for colors and styles
//!
//! ```rust
//! use r3bl_crt::{CSI_START, DSR_CURSOR_POSITION_RESPONSE_END, SGR_RESET_BYTES};
//!
//! assert_eq!(CSI_START, "\x1b[");
//! assert_eq!(DSR_CURSOR_POSITION_RESPONSE_END, b'R');
//! assert_eq!(SGR_RESET_BYTES, b"\x1b[0m");
//! ```

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi;
mod dsr;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use csi::*;
pub use dsr::*;
pub use sgr::*;
