// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrtError, CrtResult, CsiSequence, CursorPosition, DSR_CURSOR_POSITION_RESPONSE_END,
            Deadline, ESC, OutputDevice, TerminalInput, TerminalModeController,
            TermiosBackend, lock_output_device_as_mut, parse_cursor_position_report};
use std::time::Duration;

/// Ask the terminal where the cursor is.
///
/// 1. If `controller` is in cooked mode, switch to raw for the duration of this call
///    with a [`RawModeExcursion`]. [`TerminalModeController::is_raw()`] is unaffected,
///    and the previous configuration is back in place when this returns, however it
///    returns.
/// 2. Write `ESC[6n` to `output` and flush.
/// 3. Read `input` one byte at a time until `R`, waiting at most `timeout` in total.
///    Bytes that arrive before the reply's `ESC` (keys typed just before the query) are
///    dropped.
/// 4. Parse the reply with [`parse_cursor_position_report()`].
///
/// # Errors
///
/// - [`CrtError::TerminalUnavailable`] if the raw mode excursion can't be entered.
/// - [`CrtError::Io`] if writing the query or reading the reply fails.
/// - [`CrtError::CursorQueryTimeout`] if no `R` arrives in time.
/// - [`CrtError::MalformedCursorResponse`] if the reply doesn't parse.
///
/// [`RawModeExcursion`]: crate::RawModeExcursion
pub fn query_cursor_position<B: TermiosBackend>(
    controller: &mut TerminalModeController<B>,
    output: &OutputDevice,
    input: &mut impl TerminalInput,
    timeout: Duration,
) -> CrtResult<CursorPosition> {
    // Restores the terminal when it goes out of scope, on every path below.
    let _excursion = controller.begin_raw_excursion()?;

    {
        let out = lock_output_device_as_mut!(output);
        out.write_all(CsiSequence::QueryCursorPosition.to_string().as_bytes())?;
        out.flush()?;
    }

    let response = read_cursor_position_report(input, timeout)?;
    let position = parse_cursor_position_report(&response)?;
    tracing::debug!(
        message = "📍 cursor position",
        row = position.row,
        col = position.col
    );
    Ok(position)
}

/// Collect bytes up to and including the `R` that ends a report that starts with `ESC`.
fn read_cursor_position_report(
    input: &mut impl TerminalInput,
    timeout: Duration,
) -> CrtResult<Vec<u8>> {
    let deadline = Deadline::new(timeout);
    let mut acc = Vec::with_capacity(16);

    loop {
        let Some(remaining) = deadline.remaining() else {
            tracing::debug!(
                message = "⏱️ cursor position query timed out",
                received = %acc.escape_ascii()
            );
            return Err(CrtError::CursorQueryTimeout {
                timeout,
                received: acc.escape_ascii().to_string(),
            });
        };

        if !input.poll_readable(remaining)? {
            continue;
        }

        let byte = input.read_byte()?;

        if byte == ESC {
            if !acc.is_empty() {
                tracing::trace!(
                    message = "discarding input that preceded the report",
                    discarded = %acc.escape_ascii()
                );
            }
            acc.clear();
        } else if acc.is_empty() {
            tracing::trace!(
                message = "discarding input that preceded the report",
                discarded = %[byte].escape_ascii()
            );
            continue;
        }

        acc.push(byte);

        if byte == DSR_CURSOR_POSITION_RESPONSE_END {
            return Ok(acc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockTermios, MockTermiosConfig, MockTermiosOp, OutputDeviceExt,
                ScriptedInput, StdMutex};
    use pretty_assertions::assert_eq;
    use std::{io::{self, Write},
              sync::Arc};

    const TIMEOUT: Duration = Duration::from_millis(50);

    struct Fixture {
        controller: TerminalModeController<MockTermios>,
        termios: MockTermios,
        output: OutputDevice,
        stdout_mock: crate::StdoutMock,
        input: ScriptedInput,
    }

    fn fixture(reply: &[u8]) -> Fixture {
        let termios = MockTermios::new(MockTermiosConfig::cooked(1));
        let controller = TerminalModeController::new(termios.clone()).unwrap();
        let (output, stdout_mock) = OutputDevice::new_mock();
        Fixture {
            controller,
            termios,
            output,
            stdout_mock,
            input: ScriptedInput::from_bytes(reply),
        }
    }

    impl Fixture {
        fn query(&mut self) -> CrtResult<CursorPosition> {
            let mut input = self.input.clone();
            query_cursor_position(&mut self.controller, &self.output, &mut input, TIMEOUT)
        }
    }

    #[test]
    fn test_query_parses_reply_and_writes_request() {
        let mut it = fixture(b"\x1b[12;34R");

        let position = it.query().unwrap();

        assert_eq!(position, CursorPosition { row: 12, col: 34 });
        assert_eq!(it.stdout_mock.get_copy_of_buffer_as_string(), "\x1b[6n");
    }

    #[test]
    fn test_query_from_cooked_uses_excursion_and_leaks_no_state() {
        let mut it = fixture(b"\x1b[1;1R");

        it.query().unwrap();

        assert!(!it.controller.is_raw());
        assert_eq!(it.controller.saved_config(), None);
        assert_eq!(it.termios.apply_raw_count(), 1);
        assert_eq!(it.termios.restore_count(), 1);
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_malformed_reply_leaks_no_state() {
        let mut it = fixture(b"\x1b[12R");

        let result = it.query();

        assert!(matches!(
            result,
            Err(CrtError::MalformedCursorResponse { .. })
        ));
        assert!(!it.controller.is_raw());
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_timeout_leaks_no_state() {
        let mut it = fixture(b"\x1b[12;3");

        let result = it.query();

        let Err(CrtError::CursorQueryTimeout { timeout, received }) = result else {
            panic!("expected CursorQueryTimeout");
        };
        assert_eq!(timeout, TIMEOUT);
        assert_eq!(received, "\\x1b[12;3");
        assert!(!it.controller.is_raw());
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_read_error_leaks_no_state() {
        let mut it = fixture(b"");
        it.input.close();

        let result = it.query();

        assert!(matches!(result, Err(CrtError::Io(_))));
        assert!(!it.controller.is_raw());
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_already_raw_skips_excursion_and_stays_raw() {
        let mut it = fixture(b"\x1b[5;6R");
        it.controller.raw_on().unwrap();
        let applies_before = it.termios.apply_raw_count();

        let position = it.query().unwrap();

        assert_eq!(position, CursorPosition { row: 5, col: 6 });
        assert!(it.controller.is_raw());
        assert_eq!(it.termios.apply_raw_count(), applies_before);
        assert_eq!(it.termios.restore_count(), 0);
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1).made_raw());
    }

    #[test]
    fn test_excursion_failure_writes_nothing() {
        let mut it = fixture(b"\x1b[5;6R");
        it.termios.fail_on(MockTermiosOp::ApplyRaw);

        let result = it.query();

        assert!(matches!(result, Err(CrtError::TerminalUnavailable { .. })));
        assert_eq!(it.stdout_mock.get_copy_of_buffer(), Vec::<u8>::new());
        assert_eq!(it.input.read_count(), 0);
    }

    #[test]
    fn test_typeahead_before_reply_is_discarded() {
        // A typed `R`, then an arrow key, then the real reply.
        let mut it = fixture(b"xR\x1b[A\x1b[7;8R");

        let position = it.query().unwrap();

        assert_eq!(position, CursorPosition { row: 7, col: 8 });
    }

    #[test]
    fn test_reads_stop_at_terminator() {
        let mut it = fixture(b"\x1b[2;3Rleftover");

        it.query().unwrap();

        assert_eq!(it.input.remaining(), b"leftover".to_vec());
    }

    #[test]
    fn test_unbounded_timeout_returns_position() {
        let mut it = fixture(b"\x1b[2;3R");
        let mut input = it.input.clone();

        let position =
            query_cursor_position(&mut it.controller, &it.output, &mut input, Duration::MAX)
                .unwrap();

        assert_eq!(position, CursorPosition { row: 2, col: 3 });
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    /// Output whose writes all fail, like a closed pipe.
    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }
    }

    #[test]
    fn test_write_error_leaks_no_state() {
        let mut it = fixture(b"\x1b[5;6R");
        it.output = OutputDevice {
            resource: Arc::new(StdMutex::new(BrokenOutput)),
            is_mock: true,
        };

        let result = it.query();

        assert!(matches!(result, Err(CrtError::Io(_))));
        assert!(!it.controller.is_raw());
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
        assert_eq!(it.input.read_count(), 0);
    }

    #[test]
    fn test_panic_during_excursion_restores_cooked_mode() {
        let mut it = fixture(b"");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _excursion = it.controller.begin_raw_excursion().unwrap();
            assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1).made_raw());
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(!it.controller.is_raw());
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }
}
