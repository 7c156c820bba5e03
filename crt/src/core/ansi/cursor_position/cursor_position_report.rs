// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BufTextStorage, CrtError, CrtResult, DSR_CURSOR_POSITION_RESPONSE_END,
            DSR_CURSOR_POSITION_SEPARATOR, DSR_RESPONSE_START, FastStringify,
            generate_impl_display_for_fast_stringify};
use std::fmt::{self, Write};

/// Where the cursor is, as reported by the terminal. Both fields are 1-based.
///
/// This is a fresh answer to a fresh question every time, nothing caches it. Its
/// [`Display`](std::fmt::Display) impl produces the report the terminal sends,
/// `ESC [ row ; col R`.
///
/// ```rust
/// use r3bl_crt::CursorPosition;
///
/// let position = CursorPosition { row: 5, col: 10 };
/// assert_eq!(position.to_string(), "\x1b[5;10R");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub row: u32,
    pub col: u32,
}

impl CursorPosition {
    /// `(x, y)`, in the argument order of [`Crt::goto_xy()`].
    ///
    /// [`Crt::goto_xy()`]: crate::Crt::goto_xy
    #[must_use]
    pub fn as_xy(&self) -> (u32, u32) { (self.col, self.row) }
}

impl FastStringify for CursorPosition {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> fmt::Result {
        for byte in DSR_RESPONSE_START {
            acc.push(char::from(*byte));
        }
        write!(acc, "{}{DSR_CURSOR_POSITION_SEPARATOR}{}", self.row, self.col)?;
        acc.push(char::from(DSR_CURSOR_POSITION_RESPONSE_END));
        Ok(())
    }
}

generate_impl_display_for_fast_stringify!(CursorPosition);

/// Parse a complete cursor position report, `ESC [ row ; col R`.
///
/// Strict: the prefix and terminator must be present, and there must be exactly two
/// `;` separated fields, each a `u32` with no sign or whitespace.
///
/// ```rust
/// use r3bl_crt::{CursorPosition, parse_cursor_position_report};
///
/// let position = parse_cursor_position_report(b"\x1b[12;34R").unwrap();
/// assert_eq!(position, CursorPosition { row: 12, col: 34 });
///
/// assert!(parse_cursor_position_report(b"\x1b[12R").is_err());
/// ```
///
/// # Errors
///
/// [`CrtError::MalformedCursorResponse`] carrying the (escaped) input.
pub fn parse_cursor_position_report(response: &[u8]) -> CrtResult<CursorPosition> {
    let malformed = || CrtError::malformed_cursor_response(response);

    let body = response
        .strip_prefix(DSR_RESPONSE_START)
        .and_then(|it| it.strip_suffix(&[DSR_CURSOR_POSITION_RESPONSE_END]))
        .ok_or_else(malformed)?;
    let body = std::str::from_utf8(body).map_err(|_| malformed())?;

    let mut fields = body.split(DSR_CURSOR_POSITION_SEPARATOR);
    let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    Ok(CursorPosition {
        row: parse_field(row).ok_or_else(malformed)?,
        col: parse_field(col).ok_or_else(malformed)?,
    })
}

/// [`str::parse`] alone would accept a leading `+`.
fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|it| it.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
