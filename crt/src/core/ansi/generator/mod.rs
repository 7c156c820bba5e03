// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence generators.
//!
//! - [`CsiSequence`] - cursor movement, cursor visibility, erase, DSR request, reset
//! - [`FormatState`] - text color, background and style flags, rendered as one SGR
//!   sequence

// Attach sources.
mod csi_sequence;
mod format_state;

// Re-export.
pub use csi_sequence::*;
pub use format_state::*;
