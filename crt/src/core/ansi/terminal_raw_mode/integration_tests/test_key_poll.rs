// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Key polling against a real PTY: nothing pending, then one key sent by the master.

use super::{report_and_exit, wait_for_child};
use crate::{SlaveOutcome, StdinCrt, generate_pty_test, read_slave_outcome};
use std::{io::Write,
          time::{Duration, Instant}};

const READY_MARKER: &[u8] = b"KEY_POLL_READY";

generate_pty_test! {
    test_fn: test_pty_key_poll,
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

    let mut sent = false;
    let (outcome, output) = read_slave_outcome(&mut reader, |seen| {
        if !sent && seen.windows(READY_MARKER.len()).any(|w| w == READY_MARKER) {
            writer.write_all(b"k").expect("Failed to write key");
            writer.flush().expect("Failed to flush key");
            sent = true;
        }
    });

    eprintln!("📝 PTY Master: slave output:\n{output}");
    assert!(sent, "Slave never became ready");
    assert!(
        matches!(outcome, SlaveOutcome::Success(_)),
        "Slave did not report success: {outcome:?}"
    );
    wait_for_child(child);
}

fn pty_slave_entry_point() -> ! { report_and_exit(run_checks()) }

fn run_checks() -> Result<String, String> {
    let mut crt = StdinCrt::new().map_err(|e| e.to_string())?;

    if crt.pend_key().is_ok() {
        return Err("pend_key() worked in cooked mode".into());
    }

    crt.raw_on().map_err(|e| e.to_string())?;
    if crt.pend_key().map_err(|e| e.to_string())? {
        return Err("a key was pending before the master sent one".into());
    }

    crt.write_str("KEY_POLL_READY\r\n").map_err(|e| e.to_string())?;
    crt.oflush().map_err(|e| e.to_string())?;

    let start = Instant::now();
    while !crt.pend_key().map_err(|e| e.to_string())? {
        if start.elapsed() > Duration::from_secs(3) {
            return Err("no key arrived".into());
        }
    }
    let key = crt.read_key().map_err(|e| e.to_string())?;
    crt.raw_off().map_err(|e| e.to_string())?;

    if key == b'k' {
        Ok("read 'k'".into())
    } else {
        Err(format!("read {key:#x} instead of 'k'"))
    }
}
