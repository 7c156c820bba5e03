// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core raw mode functionality. See [`TerminalModeController`] and
//! [`RawModeExcursion`].

use crate::{CrtResult, TermiosBackend};

/// Owns the cooked / raw mode toggle for one terminal, and the saved configuration
/// needed to get back to cooked mode.
///
/// - Create one per terminal, at startup, and thread it through your program (or let
///   [`Crt`] own it). There is no hidden global.
/// - The configuration at construction time is kept as the startup configuration. If the
///   controller is dropped while raw, that is put back (best-effort).
/// - All methods are idempotent. On error, the state is unchanged.
///
/// See [module documentation] for the state machine.
///
/// [`Crt`]: crate::Crt
/// [module documentation]: mod@crate::core::ansi::terminal_raw_mode
#[derive(Debug)]
pub struct TerminalModeController<B: TermiosBackend> {
    backend: B,
    startup_config: B::Snapshot,
    /// `Some` iff raw mode was entered by this controller and not yet left.
    saved_config: Option<B::Snapshot>,
}

impl<B: TermiosBackend> TerminalModeController<B> {
    /// Capture the current terminal configuration and start in cooked mode.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be read, which
    /// usually means stdin is not a terminal.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn new(mut backend: B) -> CrtResult<Self> {
        let startup_config = backend.capture()?;
        tracing::debug!(message = "📸 captured startup terminal configuration");
        Ok(Self {
            backend,
            startup_config,
            saved_config: None,
        })
    }

    #[must_use]
    pub fn is_raw(&self) -> bool { self.saved_config.is_some() }

    /// Enter raw mode. No-op if already raw.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be read or set.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn raw_on(&mut self) -> CrtResult<()> {
        if self.is_raw() {
            return Ok(());
        }
        let snapshot = self.backend.capture()?;
        self.backend.apply_raw(&snapshot)?;
        self.saved_config = Some(snapshot);
        tracing::debug!(message = "🔓 raw mode on");
        Ok(())
    }

    /// Leave raw mode, restoring the configuration saved by [`raw_on()`]. Pending output
    /// is drained first. No-op if not raw.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be set. The
    /// controller stays raw (with its saved configuration) so the call can be retried.
    ///
    /// [`raw_on()`]: Self::raw_on
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn raw_off(&mut self) -> CrtResult<()> {
        let Some(snapshot) = self.saved_config.as_ref() else {
            return Ok(());
        };
        self.backend.restore(snapshot)?;
        self.saved_config = None;
        tracing::debug!(message = "🔒 raw mode off");
        Ok(())
    }

    /// Put back the configuration captured by [`new()`](Self::new), and forget any
    /// raw mode state.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be set.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn restore_startup_config(&mut self) -> CrtResult<()> {
        self.backend.restore(&self.startup_config)?;
        self.saved_config = None;
        tracing::debug!(message = "♻️ startup terminal configuration restored");
        Ok(())
    }

    /// Switch to raw mode for the lifetime of the returned guard, without changing what
    /// [`is_raw()`] reports. Returns [`None`] (and does nothing) if already raw.
    ///
    /// The configuration in effect right now is put back when the guard is dropped,
    /// whichever way the scope is left.
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if the configuration can't be read or set.
    ///
    /// [`is_raw()`]: Self::is_raw
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn begin_raw_excursion(&mut self) -> CrtResult<Option<RawModeExcursion<'_, B>>> {
        if self.is_raw() {
            return Ok(None);
        }
        let restore_to = self.backend.capture()?;
        self.backend.apply_raw(&restore_to)?;
        tracing::trace!(message = "↪️ raw mode excursion begin");
        Ok(Some(RawModeExcursion {
            backend: &mut self.backend,
            restore_to,
        }))
    }

    /// The configuration that [`raw_off()`](Self::raw_off) will restore, if raw.
    #[must_use]
    pub fn saved_config(&self) -> Option<&B::Snapshot> { self.saved_config.as_ref() }

    /// The configuration captured by [`new()`](Self::new).
    #[must_use]
    pub fn startup_config(&self) -> &B::Snapshot { &self.startup_config }
}

impl<B: TermiosBackend> Drop for TerminalModeController<B> {
    /// Best-effort: a process that is killed never gets here.
    fn drop(&mut self) {
        if !self.is_raw() {
            return;
        }
        if let Err(error) = self.restore_startup_config() {
            tracing::warn!(
                message = "⚠️ could not restore terminal configuration on drop",
                error = %error
            );
        }
    }
}

/// A scoped raw mode switch that is invisible to [`TerminalModeController::is_raw()`].
/// Created by [`TerminalModeController::begin_raw_excursion()`].
///
/// Dropping it restores the configuration that was in effect when it was created. This
/// runs on every exit path (early return with `?`, panic), so callers never restore by
/// hand.
#[derive(Debug)]
pub struct RawModeExcursion<'a, B: TermiosBackend> {
    backend: &'a mut B,
    restore_to: B::Snapshot,
}

impl<B: TermiosBackend> Drop for RawModeExcursion<'_, B> {
    fn drop(&mut self) {
        match self.backend.restore(&self.restore_to) {
            Ok(()) => tracing::trace!(message = "↩️ raw mode excursion end"),
            Err(error) => tracing::warn!(
                message = "⚠️ could not leave raw mode excursion",
                error = %error
            ),
        }
    }
}
