// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Key availability poller.
//!
//! Both functions only work in raw mode. In cooked mode the terminal driver holds input
//! back until Enter, so "is a key pending?" has no useful answer, and they fail with
//! [`CrtError::RawModeRequired`] without touching the input at all.
//!
//! [`has_pending_key()`] is the only bounded wait. [`read_key()`] blocks until a byte
//! arrives; to read with a timeout, poll first.
//!
//! ```no_run
//! use r3bl_crt::{StdinInput, StdinTermios, TerminalModeController, has_pending_key,
//!                read_key};
//! use std::time::Duration;
//!
//! # fn main() -> r3bl_crt::CrtResult<()> {
//! let mut controller = TerminalModeController::new(StdinTermios)?;
//! let mut input = StdinInput::new();
//! controller.raw_on()?;
//! if has_pending_key(&controller, &mut input, Duration::from_millis(1))? {
//!     let byte = read_key(&controller, &mut input)?;
//!     println!("{byte}\r");
//! }
//! controller.raw_off()?;
//! # Ok(())
//! # }
//! ```

use crate::{CrtError, CrtResult, RawModeSwitch, TerminalInput};
use std::time::Duration;

fn require_raw_mode(mode: &impl RawModeSwitch, operation: &'static str) -> CrtResult<()> {
    if mode.is_raw() {
        Ok(())
    } else {
        tracing::debug!(message = "🚫 raw mode required", operation);
        Err(CrtError::RawModeRequired { operation })
    }
}

/// Whether at least one byte of input is available, waiting up to `wait` for one.
///
/// # Errors
///
/// - [`CrtError::RawModeRequired`] if `mode` is not raw.
/// - [`CrtError::Io`] if the readiness check fails.
pub fn has_pending_key(
    mode: &impl RawModeSwitch,
    input: &mut impl TerminalInput,
    wait: Duration,
) -> CrtResult<bool> {
    require_raw_mode(mode, "has_pending_key")?;
    Ok(input.poll_readable(wait)?)
}

/// Block until one byte of input is available, and return it.
///
/// # Errors
///
/// - [`CrtError::RawModeRequired`] if `mode` is not raw.
/// - [`CrtError::Io`] if the read fails, or the input is closed.
pub fn read_key(mode: &impl RawModeSwitch, input: &mut impl TerminalInput) -> CrtResult<u8> {
    require_raw_mode(mode, "read_key")?;
    Ok(input.read_byte()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockTermios, MockTermiosConfig, ScriptedInput, TerminalModeController};
    use pretty_assertions::assert_eq;

    const WAIT: Duration = Duration::from_millis(1);

    fn cooked_controller() -> TerminalModeController<MockTermios> {
        TerminalModeController::new(MockTermios::new(MockTermiosConfig::cooked(0))).unwrap()
    }

    #[test]
    fn test_cooked_mode_fails_without_reading() {
        let controller = cooked_controller();
        let mut input = ScriptedInput::from_bytes(b"a");

        let pending = has_pending_key(&controller, &mut input, WAIT);
        let key = read_key(&controller, &mut input);

        assert!(matches!(
            pending,
            Err(CrtError::RawModeRequired {
                operation: "has_pending_key"
            })
        ));
        assert!(matches!(
            key,
            Err(CrtError::RawModeRequired {
                operation: "read_key"
            })
        ));
        assert_eq!(input.poll_count(), 0);
        assert_eq!(input.read_count(), 0);
        assert_eq!(input.remaining(), b"a".to_vec());
    }

    #[test]
    fn test_raw_mode_poll_and_read() {
        let mut controller = cooked_controller();
        controller.raw_on().unwrap();
        let mut input = ScriptedInput::new();

        assert!(!has_pending_key(&controller, &mut input, WAIT).unwrap());

        input.push_bytes(b"q");
        assert!(has_pending_key(&controller, &mut input, WAIT).unwrap());
        assert_eq!(read_key(&controller, &mut input).unwrap(), b'q');
        assert!(!has_pending_key(&controller, &mut input, WAIT).unwrap());
    }

    #[test]
    fn test_read_key_does_not_require_prior_poll() {
        let mut controller = cooked_controller();
        controller.raw_on().unwrap();
        let mut input = ScriptedInput::from_bytes([0x1b, b'x']);

        assert_eq!(read_key(&controller, &mut input).unwrap(), 0x1b);
        assert_eq!(read_key(&controller, &mut input).unwrap(), b'x');
        assert_eq!(input.poll_count(), 0);
    }

    #[test]
    fn test_read_key_at_end_of_input_is_io_error() {
        let mut controller = cooked_controller();
        controller.raw_on().unwrap();
        let mut input = ScriptedInput::new();

        let result = read_key(&controller, &mut input);

        assert!(matches!(result, Err(CrtError::Io(error))
            if error.kind() == std::io::ErrorKind::UnexpectedEof));
    }
}
