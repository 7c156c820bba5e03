// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI sequence builder for the one-shot terminal commands.
//!
//! Each variant is a single verbatim write to the output device; there's no state
//! behind any of them. The stateful SGR formatting lives in [`FormatState`].
//!
//! [`FormatState`]: crate::FormatState

use crate::{BufTextStorage, CSI_PARAM_SEPARATOR, CSI_START, CUP_CURSOR_POSITION,
            DECTCEM_HIDE_CURSOR, DECTCEM_SHOW_CURSOR, DSR_REQUEST_CURSOR_POSITION,
            ED_ERASE_ALL, EL_ERASE_TO_END, FastStringify, SGR_END,
            generate_impl_display_for_fast_stringify};
use std::fmt::{self, Write};

/// Builder for the CSI sequences this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// ESC [ row ; col H - move the cursor (1-based).
    MoveCursor { row: u32, col: u32 },
    /// ESC [ 1 ; 1 H - move the cursor to the top left corner.
    CursorHome,
    /// ESC [ 6 n - ask the terminal to report the cursor position.
    QueryCursorPosition,
    /// ESC [ ? 25 l
    HideCursor,
    /// ESC [ ? 25 h
    ShowCursor,
    /// ESC [ 2 J - clear the whole screen (the cursor does not move).
    ClearScreen,
    /// ESC [ 0 K - clear from the cursor to the end of the line.
    ClearToEndOfLine,
    /// ESC [ 0 m - reset all text attributes.
    SgrReset,
}

impl FastStringify for CsiSequence {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> fmt::Result {
        acc.push_str(CSI_START);
        match self {
            CsiSequence::MoveCursor { row, col } => {
                write!(acc, "{row}{CSI_PARAM_SEPARATOR}{col}")?;
                acc.push(CUP_CURSOR_POSITION);
            }
            CsiSequence::CursorHome => {
                acc.push('1');
                acc.push(CSI_PARAM_SEPARATOR);
                acc.push('1');
                acc.push(CUP_CURSOR_POSITION);
            }
            CsiSequence::QueryCursorPosition => acc.push_str(DSR_REQUEST_CURSOR_POSITION),
            CsiSequence::HideCursor => acc.push_str(DECTCEM_HIDE_CURSOR),
            CsiSequence::ShowCursor => acc.push_str(DECTCEM_SHOW_CURSOR),
            CsiSequence::ClearScreen => acc.push_str(ED_ERASE_ALL),
            CsiSequence::ClearToEndOfLine => acc.push_str(EL_ERASE_TO_END),
            CsiSequence::SgrReset => {
                acc.push('0');
                acc.push(SGR_END);
            }
        }
        Ok(())
    }
}

generate_impl_display_for_fast_stringify!(CsiSequence);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SGR_RESET_BYTES;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(CsiSequence::MoveCursor { row: 5, col: 10 }, "\x1b[5;10H")]
    #[test_case(CsiSequence::CursorHome, "\x1b[1;1H")]
    #[test_case(CsiSequence::QueryCursorPosition, "\x1b[6n")]
    #[test_case(CsiSequence::HideCursor, "\x1b[?25l")]
    #[test_case(CsiSequence::ShowCursor, "\x1b[?25h")]
    #[test_case(CsiSequence::ClearScreen, "\x1b[2J")]
    #[test_case(CsiSequence::ClearToEndOfLine, "\x1b[0K")]
    fn test_csi_sequence(sequence: CsiSequence, expected: &str) {
        assert_eq!(sequence.to_string(), expected);
    }

    #[test]
    fn test_sgr_reset_matches_constant() {
        assert_eq!(CsiSequence::SgrReset.to_string().as_bytes(), SGR_RESET_BYTES);
    }
}
