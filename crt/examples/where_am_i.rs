// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints where the cursor is, then echoes key codes in raw mode until `q` is pressed.
//!
//! ```sh
//! cargo run -p r3bl_crt --example where_am_i -- --timeout-ms 500 --log-file /tmp/crt.log
//! ```

use clap::Parser;
use r3bl_crt::{Color, CrtConfig, RawModeGuard, StdinCrt, TracingConfig,
               setup_default_miette_global_report_handler, try_initialize_logging_global};
use std::time::Duration;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[derive(Debug, Parser)]
#[command(about = "Ask the terminal where the cursor is, then echo key codes")]
struct CliArgs {
    /// How long to wait for the terminal to answer the cursor position query.
    #[arg(long, default_value_t = 1_000)]
    timeout_ms: u64,

    /// Write debug logs to this file.
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);
    let args = CliArgs::parse();

    if let Some(log_file) = args.log_file {
        try_initialize_logging_global(&TracingConfig::new_file(Some(log_file)))?;
    }

    let config =
        CrtConfig::default().with_cursor_query_timeout(Duration::from_millis(args.timeout_ms));
    let mut crt = StdinCrt::new_with_config(config)?;

    let (x, y) = crt.where_xy()?;
    crt.text_color(Color::Cyan)?;
    crt.set_bold(true)?;
    crt.write_str(&format!("The cursor was at x = {x}, y = {y}.\n"))?;
    crt.format_reset()?;
    crt.write_str("Press keys to see their codes, `q` to quit.\n")?;
    crt.oflush()?;

    {
        let mut crt = RawModeGuard::new(&mut crt)?;
        loop {
            if !crt.pend_key()? {
                StdinCrt::delay(10);
                continue;
            }
            let key = crt.read_key()?;
            if key == b'q' {
                break;
            }
            // No output post-processing in raw mode, so `\r\n` by hand.
            crt.write_str(&format!("{key:#04x} {:?}\r\n", char::from(key)))?;
            crt.oflush()?;
        }
    }

    crt.show_cursor()?;
    crt.oflush()?;
    Ok(())
}
