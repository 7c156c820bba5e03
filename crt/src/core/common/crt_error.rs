// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetattr tcsetattr

//! The single error type for this crate. See [`CrtError`] for details.

use std::{io, time::Duration};

/// Convenience alias used by every fallible operation in this crate.
pub type CrtResult<T> = Result<T, CrtError>;

/// Errors returned by [`Crt`] and the lower level building blocks it is made from.
///
/// Each variant has a dedicated [diagnostic code] and help text. None of them are fatal
/// to the process, and the raw mode state is always consistent when one of them is
/// returned (scoped raw mode excursions are restored before the error propagates).
///
/// | Variant                     | Cause                                                 |
/// | :-------------------------- | :---------------------------------------------------- |
/// | [`TerminalUnavailable`]     | `tcgetattr()` / `tcsetattr()` failed (stdin not a tty) |
/// | [`RawModeRequired`]         | Key polling while the terminal is in cooked mode      |
/// | [`MalformedCursorResponse`] | Reply to `ESC[6n` was not `ESC[row;colR`              |
/// | [`CursorQueryTimeout`]      | No complete reply to `ESC[6n` before the deadline     |
/// | [`Io`]                      | Any other read / write / flush failure                |
///
/// [`Crt`]: crate::Crt
/// [`TerminalUnavailable`]: Self::TerminalUnavailable
/// [`RawModeRequired`]: Self::RawModeRequired
/// [`MalformedCursorResponse`]: Self::MalformedCursorResponse
/// [`CursorQueryTimeout`]: Self::CursorQueryTimeout
/// [`Io`]: Self::Io
/// [diagnostic code]: miette::Diagnostic::code
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CrtError {
    /// Getting or setting terminal attributes failed.
    #[error("terminal unavailable: {operation} failed")]
    #[diagnostic(
        code(r3bl_crt::terminal_unavailable),
        help(
            "stdin must be connected to an interactive terminal. \
             This usually fails when input is redirected from a file or a pipe."
        )
    )]
    TerminalUnavailable {
        /// The OS call that failed (`"tcgetattr"` or `"tcsetattr"`).
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// An operation that only makes sense in raw mode was called in cooked mode.
    #[error("{operation} requires raw mode")]
    #[diagnostic(
        code(r3bl_crt::raw_mode_required),
        help("Call `raw_on()` (or hold a `RawModeGuard`) before polling for keys.")
    )]
    RawModeRequired {
        /// The operation that was attempted (`"has_pending_key"` or `"read_key"`).
        operation: &'static str,
    },

    /// The terminal replied to the cursor position query, but not with
    /// `ESC [ row ; col R`.
    #[error("malformed cursor position report: \"{response}\"")]
    #[diagnostic(
        code(r3bl_crt::malformed_cursor_response),
        help(
            "Expected `ESC [ <row> ; <col> R`. Keys typed while the query was in \
             flight can interleave with the reply."
        )
    )]
    MalformedCursorResponse {
        /// The bytes that were received, with non printable bytes escaped.
        response: String,
    },

    /// The terminal did not reply to the cursor position query in time.
    #[error("no cursor position report within {timeout:?}")]
    #[diagnostic(
        code(r3bl_crt::cursor_query_timeout),
        help(
            "The terminal did not answer `ESC[6n`. It may not support device status \
             reports, or stdin may not be connected to the terminal emulator."
        )
    )]
    CursorQueryTimeout {
        /// The deadline that expired.
        timeout: Duration,
        /// Bytes received before the deadline expired, escaped.
        received: String,
    },

    /// Reading from the input device or writing to the output device failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_crt::io))]
    Io(#[from] io::Error),
}

impl CrtError {
    /// Wrap a failed termios call.
    pub fn terminal_unavailable(
        operation: &'static str,
        source: impl Into<io::Error>,
    ) -> Self {
        CrtError::TerminalUnavailable {
            operation,
            source: source.into(),
        }
    }

    /// Build a [`CrtError::MalformedCursorResponse`] from the raw reply bytes.
    #[must_use]
    pub fn malformed_cursor_response(response: &[u8]) -> Self {
        CrtError::MalformedCursorResponse {
            response: response.escape_ascii().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_malformed_response_escapes_control_bytes() {
        let error = CrtError::malformed_cursor_response(b"\x1b[12R");
        assert_eq!(
            error.to_string(),
            "malformed cursor position report: \"\\x1b[12R\""
        );
    }

    #[test]
    fn test_terminal_unavailable_keeps_source() {
        let error = CrtError::terminal_unavailable(
            "tcgetattr",
            io::Error::from(io::ErrorKind::Unsupported),
        );
        assert_eq!(error.to_string(), "terminal unavailable: tcgetattr failed");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic;

        let error = CrtError::RawModeRequired {
            operation: "read_key",
        };
        assert_eq!(
            error.code().map(|it| it.to_string()),
            Some("r3bl_crt::raw_mode_required".to_string())
        );
        assert_eq!(error.to_string(), "read_key requires raw mode");
    }
}
