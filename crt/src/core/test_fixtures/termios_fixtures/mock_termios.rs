// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrtError, CrtResult, StdMutex, TermiosBackend};
use std::{io,
          sync::{Arc, PoisonError}};

/// The parts of a terminal configuration that raw mode changes, plus a `generation`
/// tag so tests can tell two otherwise equal configurations apart.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MockTermiosConfig {
    pub canonical: bool,
    pub echo: bool,
    pub signals: bool,
    pub generation: u32,
}

impl MockTermiosConfig {
    /// A typical cooked mode configuration.
    #[must_use]
    pub fn cooked(generation: u32) -> Self {
        Self {
            canonical: true,
            echo: true,
            signals: true,
            generation,
        }
    }

    /// What `cfmakeraw()` would turn this into.
    #[must_use]
    pub fn made_raw(self) -> Self {
        Self {
            canonical: false,
            echo: false,
            signals: false,
            ..self
        }
    }
}

/// Which [`TermiosBackend`] call [`MockTermios::fail_on()`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTermiosOp {
    Capture,
    ApplyRaw,
    Restore,
}

#[derive(Debug, Default)]
struct MockTermiosState {
    current: MockTermiosConfig,
    capture_count: usize,
    apply_raw_count: usize,
    restore_count: usize,
    fail_next: Option<MockTermiosOp>,
}

/// In-memory [`TermiosBackend`].
///
/// You can safely clone this struct, the clones share the same state. Hand one clone to
/// a [`TerminalModeController`] and keep another to make assertions.
///
/// [`TerminalModeController`]: crate::TerminalModeController
#[derive(Debug, Clone, Default)]
pub struct MockTermios {
    state: Arc<StdMutex<MockTermiosState>>,
}

impl MockTermios {
    #[must_use]
    pub fn new(initial: MockTermiosConfig) -> Self {
        Self {
            state: Arc::new(StdMutex::new(MockTermiosState {
                current: initial,
                ..MockTermiosState::default()
            })),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockTermiosState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Make the next call of kind `op` fail with [`CrtError::TerminalUnavailable`].
    pub fn fail_on(&self, op: MockTermiosOp) {
        self.with_state(|state| state.fail_next = Some(op));
    }

    /// The configuration the "terminal" currently has.
    #[must_use]
    pub fn current(&self) -> MockTermiosConfig { self.with_state(|state| state.current) }

    #[must_use]
    pub fn capture_count(&self) -> usize { self.with_state(|state| state.capture_count) }

    #[must_use]
    pub fn apply_raw_count(&self) -> usize {
        self.with_state(|state| state.apply_raw_count)
    }

    #[must_use]
    pub fn restore_count(&self) -> usize { self.with_state(|state| state.restore_count) }
}

fn check_failure(state: &mut MockTermiosState, op: MockTermiosOp) -> CrtResult<()> {
    if state.fail_next == Some(op) {
        state.fail_next = None;
        let operation = match op {
            MockTermiosOp::Capture => "tcgetattr",
            MockTermiosOp::ApplyRaw | MockTermiosOp::Restore => "tcsetattr",
        };
        return Err(CrtError::terminal_unavailable(
            operation,
            io::Error::from_raw_os_error(25), // ENOTTY
        ));
    }
    Ok(())
}

impl TermiosBackend for MockTermios {
    type Snapshot = MockTermiosConfig;

    fn capture(&mut self) -> CrtResult<MockTermiosConfig> {
        self.with_state(|state| {
            check_failure(state, MockTermiosOp::Capture)?;
            state.capture_count += 1;
            Ok(state.current)
        })
    }

    fn apply_raw(&mut self, base: &MockTermiosConfig) -> CrtResult<()> {
        self.with_state(|state| {
            check_failure(state, MockTermiosOp::ApplyRaw)?;
            state.apply_raw_count += 1;
            state.current = base.made_raw();
            Ok(())
        })
    }

    fn restore(&mut self, snapshot: &MockTermiosConfig) -> CrtResult<()> {
        self.with_state(|state| {
            check_failure(state, MockTermiosOp::Restore)?;
            state.restore_count += 1;
            state.current = *snapshot;
            Ok(())
        })
    }
}
