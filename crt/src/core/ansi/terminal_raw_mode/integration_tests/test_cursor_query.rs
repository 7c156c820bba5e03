// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `ESC[6n` round trip, answered by the PTY master.

use super::{report_and_exit, same_modes, stdin_termios, wait_for_child};
use crate::{CursorPosition, SlaveOutcome, StdinCrt, generate_pty_test,
            read_slave_outcome};
use std::io::Write;

const CANNED_REPLY: &[u8] = b"\x1b[3;5R";

generate_pty_test! {
    /// The slave starts in cooked mode and asks where the cursor is. The master plays
    /// the terminal and replies. The slave must parse the reply and be back in cooked
    /// mode afterwards.
    test_fn: test_pty_cursor_query_round_trip,
    master: pty_master_entry_point,
    slave: pty_slave_entry_point
}

fn pty_master_entry_point(
    pty_pair: portable_pty::PtyPair,
    child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = pty_pair
        .master
        .try_clone_reader()
        .expect("Failed to get reader");
    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");

    let mut answered = false;
    let (outcome, output) = read_slave_outcome(&mut reader, |seen| {
        if !answered && seen.windows(4).any(|w| w == b"\x1b[6n") {
            writer.write_all(CANNED_REPLY).expect("Failed to write reply");
            writer.flush().expect("Failed to flush reply");
            answered = true;
        }
    });

    eprintln!("📝 PTY Master: slave output:\n{output}");
    assert!(answered, "Slave never sent ESC[6n");
    assert!(
        matches!(outcome, SlaveOutcome::Success(_)),
        "Slave did not report success: {outcome:?}"
    );
    wait_for_child(child);
}

fn pty_slave_entry_point() -> ! { report_and_exit(run_checks()) }

fn run_checks() -> Result<String, String> {
    let before = stdin_termios()?;
    let mut crt = StdinCrt::new().map_err(|e| e.to_string())?;

    let position = crt.cursor_position().map_err(|e| e.to_string())?;

    if position != (CursorPosition { row: 3, col: 5 }) {
        return Err(format!("unexpected position {position:?}"));
    }
    if crt.is_raw() {
        return Err("is_raw() is true after the query".into());
    }
    if !same_modes(&before, &stdin_termios()?) {
        return Err("the query left the terminal modes changed".into());
    }
    drop(crt);

    Ok(format!("cursor at {position:?}"))
}
