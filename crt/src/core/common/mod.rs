// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod crt_error;
pub mod deadline;
pub mod fast_stringify;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use crt_error::*;
pub use deadline::*;
pub use fast_stringify::*;
pub use miette_setup_global_report_handler::*;
