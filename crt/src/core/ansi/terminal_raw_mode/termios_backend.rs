// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CrtResult;
use std::fmt::Debug;

/// Access to the OS terminal configuration, as opaque snapshots.
///
/// [`TerminalModeController`] only ever needs three things from the OS: take a snapshot
/// of the current configuration, switch to raw mode starting from a snapshot, and put a
/// snapshot back. Keeping this behind a trait means the state machine can be tested
/// against [`MockTermios`] without a real terminal.
///
/// Implementations:
/// - [`StdinTermios`] (Unix): `tcgetattr()` / `cfmakeraw()` / `tcsetattr()` on stdin.
/// - [`MockTermios`]: in memory, records every call.
///
/// [`TerminalModeController`]: crate::TerminalModeController
/// [`StdinTermios`]: crate::StdinTermios
/// [`MockTermios`]: crate::MockTermios
pub trait TermiosBackend: Debug {
    /// Opaque copy of the terminal configuration.
    type Snapshot: Clone + Debug;

    /// Read the current configuration.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be read.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    fn capture(&mut self) -> CrtResult<Self::Snapshot>;

    /// Apply the raw mode variant of `base`, effective immediately.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be set.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    fn apply_raw(&mut self, base: &Self::Snapshot) -> CrtResult<()>;

    /// Apply `snapshot`, after pending output has been drained.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be set.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    fn restore(&mut self, snapshot: &Self::Snapshot) -> CrtResult<()>;
}
