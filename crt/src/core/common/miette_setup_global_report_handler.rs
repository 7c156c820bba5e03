// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetwinsize

//! Install a graphical [miette](https://docs.rs/miette/latest/miette/index.html) report
//! handler, so that a `main() -> miette::Result<_>` that fails with a [`CrtError`] prints
//! its diagnostic code and help text nicely.
//!
//! The hook is lazy: the terminal width is only looked up when a report is actually
//! displayed.
//!
//! [`CrtError`]: crate::CrtError

use miette::MietteHandlerOpts;
use tracing::debug;

/// Columns used when the width of stdout can't be determined (not a tty).
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Register the default graphical report handler. `issues_url` is shown in the footer.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = get_stdout_width().unwrap_or(DEFAULT_REPORT_WIDTH);
            debug!("miette::set_hook -> terminal_width: {it}");
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

#[cfg(unix)]
fn get_stdout_width() -> Option<usize> {
    let stdout = std::io::stdout();
    rustix::termios::tcgetwinsize(&stdout)
        .ok()
        .map(|it| usize::from(it.ws_col))
        .filter(|it| *it > 0)
}

#[cfg(not(unix))]
fn get_stdout_width() -> Option<usize> { None }
