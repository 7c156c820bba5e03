// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence constants.

/// SGR final byte.
pub const SGR_END: char = 'm';

/// SGR Reset sequence bytes.
///
/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET_BYTES: &[u8] = b"\x1b[0m";

/// Added to a [`Color`] index to select it as the foreground color (30..=37).
///
/// [`Color`]: crate::Color
pub const SGR_FG_BASE: u8 = 30;

/// Added to a [`Color`] index to select it as the background color (40..=47).
///
/// [`Color`]: crate::Color
pub const SGR_BG_BASE: u8 = 40;

// Style parameters, in the order they are emitted.

pub const SGR_BOLD: &str           = "1";
pub const SGR_ITALIC: &str         = "3";
pub const SGR_UNDERLINE: &str      = "4";
pub const SGR_CONCEAL: &str        = "8";
pub const SGR_STRIKETHROUGH: &str  = "9";
