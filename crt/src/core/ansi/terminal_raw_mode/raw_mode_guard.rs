// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrtResult, TerminalModeController, TermiosBackend};
use std::ops::{Deref, DerefMut};

/// Anything that can be switched in and out of raw mode: the bare
/// [`TerminalModeController`], or a [`Crt`] that owns one.
///
/// [`Crt`]: crate::Crt
pub trait RawModeSwitch {
    fn is_raw(&self) -> bool;

    /// # Errors
    ///
    /// See [`TerminalModeController::raw_on()`].
    fn raw_on(&mut self) -> CrtResult<()>;

    /// # Errors
    ///
    /// See [`TerminalModeController::raw_off()`].
    fn raw_off(&mut self) -> CrtResult<()>;
}

impl<B: TermiosBackend> RawModeSwitch for TerminalModeController<B> {
    fn is_raw(&self) -> bool { TerminalModeController::is_raw(self) }

    fn raw_on(&mut self) -> CrtResult<()> { TerminalModeController::raw_on(self) }

    fn raw_off(&mut self) -> CrtResult<()> { TerminalModeController::raw_off(self) }
}

/// RAII guard that turns raw mode on, and turns it off again when dropped.
///
/// Recommended way to use raw mode as it ensures terminal restoration even on panic.
/// Unlike [`RawModeExcursion`], raw mode is visible through the guard (so
/// [`Crt::pend_key()`] and [`Crt::read_key()`] work), and the guard dereferences to
/// whatever it wraps.
///
/// If raw mode was already on when the guard was created, dropping the guard leaves it
/// on: the guard only undoes what it did.
///
/// [`RawModeExcursion`]: crate::RawModeExcursion
/// [`Crt::pend_key()`]: crate::Crt::pend_key
/// [`Crt::read_key()`]: crate::Crt::read_key
#[derive(Debug)]
pub struct RawModeGuard<'a, T: RawModeSwitch> {
    inner: &'a mut T,
    switched_on: bool,
}

impl<'a, T: RawModeSwitch> RawModeGuard<'a, T> {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    /// See [`TerminalModeController::raw_on()`] for error conditions.
    pub fn new(inner: &'a mut T) -> CrtResult<Self> {
        let switched_on = !inner.is_raw();
        inner.raw_on()?;
        Ok(Self { inner, switched_on })
    }
}

impl<T: RawModeSwitch> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T { self.inner }
}

impl<T: RawModeSwitch> DerefMut for RawModeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T { self.inner }
}

impl<T: RawModeSwitch> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if !self.switched_on {
            return;
        }
        if let Err(error) = self.inner.raw_off() {
            tracing::warn!(
                message = "⚠️ could not leave raw mode on guard drop",
                error = %error
            );
        }
    }
}
