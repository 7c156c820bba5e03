// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Deadline;
use std::{io::Read, time::Duration};

/// Result line prefix the slave prints when its checks pass.
pub const SLAVE_SUCCESS_MARKER: &str = "SUCCESS:";
/// Result line prefix the slave prints when a check fails.
pub const SLAVE_FAILED_MARKER: &str = "FAILED:";

/// What the slave reported, found by [`read_slave_outcome()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlaveOutcome {
    Success(String),
    Failed(String),
    /// EOF, a read error, or the deadline, before any result line.
    NoResult,
}

/// Read the slave's merged stdout / stderr from the PTY master until a complete
/// [`SLAVE_SUCCESS_MARKER`] or [`SLAVE_FAILED_MARKER`] line shows up.
///
/// Raw reads are used instead of `read_line()`, because some of what the slave writes
/// (like `ESC[6n`) is never followed by a newline. `on_output` sees everything read so
/// far after every chunk, so the master can react to requests from the slave.
///
/// Returns the outcome and the whole output (lossy UTF-8).
pub fn read_slave_outcome(
    reader: &mut impl Read,
    mut on_output: impl FnMut(&[u8]),
) -> (SlaveOutcome, String) {
    let deadline = Deadline::new(Duration::from_secs(10));
    let mut acc: Vec<u8> = vec![];
    let mut buf = [0_u8; 1024];

    while deadline.has_time_remaining() {
        // On Linux the master gets EIO, not EOF, once the slave side is closed.
        let Ok(count) = reader.read(&mut buf) else {
            break;
        };
        if count == 0 {
            break;
        }
        acc.extend_from_slice(&buf[..count]);
        on_output(&acc);

        let output = String::from_utf8_lossy(&acc);
        let complete_lines = output.rfind('\n').map_or("", |end| &output[..end]);
        for line in complete_lines.lines().map(str::trim) {
            if let Some(rest) = line.strip_prefix(SLAVE_SUCCESS_MARKER) {
                return (SlaveOutcome::Success(rest.trim().into()), output.to_string());
            }
            if let Some(rest) = line.strip_prefix(SLAVE_FAILED_MARKER) {
                return (SlaveOutcome::Failed(rest.trim().into()), output.to_string());
            }
        }
    }

    (
        SlaveOutcome::NoResult,
        String::from_utf8_lossy(&acc).into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finds_success_line() {
        let mut reader: &[u8] = b"SLAVE_STARTING\r\nSUCCESS: all good\r\n";
        let (outcome, _) = read_slave_outcome(&mut reader, |_| {});
        assert_eq!(outcome, SlaveOutcome::Success("all good".into()));
    }

    #[test]
    fn test_finds_failed_line() {
        let mut reader: &[u8] = b"FAILED: nope\n";
        let (outcome, _) = read_slave_outcome(&mut reader, |_| {});
        assert_eq!(outcome, SlaveOutcome::Failed("nope".into()));
    }

    #[test]
    fn test_eof_without_result() {
        let mut reader: &[u8] = b"\x1b[6n";
        let mut seen = vec![];
        let (outcome, output) = read_slave_outcome(&mut reader, |it| seen = it.to_vec());
        assert_eq!(outcome, SlaveOutcome::NoResult);
        assert_eq!(output, "\x1b[6n");
        assert_eq!(seen, b"\x1b[6n".to_vec());
    }
}
