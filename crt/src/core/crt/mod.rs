// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crt_api;
pub mod crt_config;

// Re-export.
pub use crt_api::*;
pub use crt_config::*;
