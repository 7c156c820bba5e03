// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Macro that generates PTY-based integration tests with automatic test name injection.
///
/// 1. **CI detection**: Automatically skips the test in CI environments
/// 2. **Process routing**: Routes to master or slave code based on environment variable
/// 3. **PTY setup**: Creates PTY pair and spawns slave process automatically
///
/// ```text
///  test binary (master)                    test binary (slave, R3BL_PTY_TEST_SLAVE=1)
/// ┌──────────────────────┐  PTY master    ┌───────────────────────────────┐
/// │ creates 24x80 PTY    │ ◀───────────▶  │ stdin/stdout are the PTY slave │
/// │ spawns itself        │   merged I/O   │ runs only this test            │
/// │ calls master fn      │                │ calls slave fn, which exits    │
/// └──────────────────────┘                └───────────────────────────────┘
/// ```
///
/// # Notes
///
/// - The slave function MUST call [`std::process::exit`] to prevent test recursion.
///   Destructors don't run on `exit`, so drop guards explicitly before it.
/// - In a PTY, stdout and stderr are merged into a single stream from the master's
///   perspective. Use content-based markers (`SUCCESS:`, `FAILED:`) to report results.
///
/// # Master Function Signature
///
/// - `pty_pair: portable_pty::PtyPair` - The PTY pair for communication
/// - `child: Box<dyn portable_pty::Child + Send + Sync>` - The spawned slave process
#[macro_export]
macro_rules! generate_pty_test {
    (
        $(#[$meta:meta])*
        test_fn: $test_name:ident,
        master: $master_fn:expr,
        slave: $slave_fn:expr
    ) => {
        $(#[$meta])*
        #[test]
        fn $test_name() {
            use std::io::Write;
            use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};

            const PTY_SLAVE_ENV_VAR: &str = "R3BL_PTY_TEST_SLAVE";

            let pty_slave_env_var = std::env::var(PTY_SLAVE_ENV_VAR);

            // Skip in CI if running as master
            if pty_slave_env_var.is_err() && is_ci::cached() {
                println!("⏭️  Skipped in CI (requires interactive terminal)");
                return;
            }

            // Check if we're running as the slave process
            if pty_slave_env_var.is_ok() {
                println!("SLAVE_STARTING");
                std::io::stdout().flush().expect("Failed to flush stdout");

                // Run the slave logic (never returns - exits process)
                $slave_fn();
            }

            // Otherwise, run as master - create PTY and spawn slave
            let pty_system = NativePtySystem::default();
            let pty_pair = pty_system
                .openpty(PtySize {
                    rows: 24,
                    cols: 80,
                    pixel_width: 0,
                    pixel_height: 0,
                })
                .expect("Failed to create PTY pair");

            let test_binary =
                std::env::current_exe().expect("Failed to get current executable");
            let mut cmd = CommandBuilder::new(&test_binary);
            cmd.env(PTY_SLAVE_ENV_VAR, "1");
            cmd.env("RUST_BACKTRACE", "1");
            cmd.args(&["--test-threads", "1", "--nocapture", stringify!($test_name)]);

            let child = pty_pair
                .slave
                .spawn_command(cmd)
                .expect("Failed to spawn slave process");

            // Call user's master function with PTY resources
            $master_fn(pty_pair, child);
        }
    };
}
