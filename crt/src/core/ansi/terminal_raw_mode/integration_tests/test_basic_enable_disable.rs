// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode on / off, and the guard, against a real PTY.

use super::{report_and_exit, same_modes, stdin_termios, wait_for_child};
use crate::{RawModeGuard, SlaveOutcome, StdinTermios, TerminalModeController,
            generate_pty_test, read_slave_outcome};
use rustix::termios::LocalModes;

generate_pty_test! {
    /// Verifies that raw mode really changes the PTY's termios, and that both
    /// `raw_off()` and dropping a `RawModeGuard` put back exactly what was there.
    test_fn: test_pty_raw_mode_enable_disable,
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

    let (outcome, output) = read_slave_outcome(&mut reader, |_| {});

    eprintln!("📝 PTY Master: slave output:\n{output}");
    assert!(
        matches!(outcome, SlaveOutcome::Success(_)),
        "Slave did not report success: {outcome:?}"
    );
    wait_for_child(child);
}

fn pty_slave_entry_point() -> ! { report_and_exit(run_checks()) }

fn run_checks() -> Result<String, String> {
    let before = stdin_termios()?;
    let mut controller =
        TerminalModeController::new(StdinTermios).map_err(|e| e.to_string())?;

    controller.raw_on().map_err(|e| e.to_string())?;
    let during = stdin_termios()?;
    if during.local_modes.intersects(LocalModes::ICANON | LocalModes::ECHO) {
        return Err("ICANON / ECHO still set after raw_on()".into());
    }
    if !controller.is_raw() {
        return Err("is_raw() is false after raw_on()".into());
    }

    controller.raw_off().map_err(|e| e.to_string())?;
    if !same_modes(&before, &stdin_termios()?) {
        return Err("raw_off() did not restore the original modes".into());
    }

    {
        let guard = RawModeGuard::new(&mut controller).map_err(|e| e.to_string())?;
        if !guard.is_raw() {
            return Err("guard is not raw".into());
        }
    }
    if controller.is_raw() || !same_modes(&before, &stdin_termios()?) {
        return Err("dropping the guard did not restore the original modes".into());
    }

    Ok("raw mode enabled, disabled and restored".into())
}
