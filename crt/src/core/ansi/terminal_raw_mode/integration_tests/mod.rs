// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! PTY based integration tests. Each test re-runs the test binary as a child process
//! whose stdin / stdout are the slave side of a fresh PTY, so real termios calls, real
//! `poll(2)` and a real `ESC[6n` round trip are exercised. Skipped on CI.
//!
//! Run with: `cargo test -p r3bl_crt --lib test_pty -- --nocapture`

mod test_basic_enable_disable;
mod test_cursor_query;
mod test_key_poll;

use rustix::termios::Termios;

/// Print the result line the master is waiting for, and exit the slave process.
fn report_and_exit(result: Result<String, String>) -> ! {
    use std::io::Write;
    match result {
        Ok(message) => println!("{}{message}", crate::SLAVE_SUCCESS_MARKER),
        Err(message) => println!("{}{message}", crate::SLAVE_FAILED_MARKER),
    }
    std::io::stdout().flush().expect("Failed to flush");
    std::process::exit(0);
}

fn stdin_termios() -> Result<Termios, String> {
    rustix::termios::tcgetattr(std::io::stdin()).map_err(|e| format!("tcgetattr: {e}"))
}

/// The fields raw mode changes.
fn same_modes(lhs: &Termios, rhs: &Termios) -> bool {
    lhs.local_modes == rhs.local_modes
        && lhs.input_modes == rhs.input_modes
        && lhs.output_modes == rhs.output_modes
        && lhs.control_modes == rhs.control_modes
}

fn wait_for_child(mut child: Box<dyn portable_pty::Child + Send + Sync>) {
    match child.wait() {
        Ok(status) => eprintln!("✅ PTY Master: Slave exited: {status:?}"),
        Err(e) => panic!("Failed to wait for slave: {e}"),
    }
}
