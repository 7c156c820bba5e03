// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Device Status Report (DSR) sequence constants.

/// DSR request with parameter 6 (report cursor position): ESC [ 6 n
pub const DSR_REQUEST_CURSOR_POSITION: &str = "6n";

/// CSI sequence start for DSR responses: ESC [
pub const DSR_RESPONSE_START: &[u8] = b"\x1b[";

/// Separates the row and column in a cursor position response.
pub const DSR_CURSOR_POSITION_SEPARATOR: char = ';';

/// Cursor position response terminator: R
pub const DSR_CURSOR_POSITION_RESPONSE_END: u8 = b'R';
