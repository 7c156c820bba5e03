// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) constants.

/// The escape byte.
pub const ESC: u8 = 0x1b;

/// Introduces every CSI sequence: ESC [
pub const CSI_START: &str = "\x1b[";

/// Separates CSI parameters.
pub const CSI_PARAM_SEPARATOR: char = ';';

// Cursor movement.

/// CUP (Cursor Position) final byte: ESC [ row ; col H
pub const CUP_CURSOR_POSITION: char = 'H';

// Erase.

/// ED (Erase in Display) with parameter 2: clear the entire screen.
pub const ED_ERASE_ALL: &str = "2J";

/// EL (Erase in Line) with parameter 0: clear from cursor to end of line.
pub const EL_ERASE_TO_END: &str = "0K";

// Cursor visibility (DEC private mode 25, DECTCEM).

/// Hide the cursor: ESC [ ? 25 l
pub const DECTCEM_HIDE_CURSOR: &str = "?25l";

/// Show the cursor: ESC [ ? 25 h
pub const DECTCEM_SHOW_CURSOR: &str = "?25h";
