// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod generate_pty_test;
pub mod read_slave_lines;

// Re-export.
pub use read_slave_lines::*;
