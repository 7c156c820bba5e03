// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing subscriber setup.
//!
//! This crate only emits `tracing` events (raw mode transitions, cursor query results,
//! restore failures). Nothing is printed unless the application installs a subscriber,
//! for example with [`try_initialize_logging_global()`].
//!
//! While the terminal is in raw mode, stdout belongs to the application, so log to a
//! file ([`WriterConfig::File`]) or to stderr.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
