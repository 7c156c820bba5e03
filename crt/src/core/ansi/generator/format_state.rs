// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text color, background and style flags, rendered as a single SGR sequence.
//!
//! The sequence always has the shape `ESC [ {bg} ; {fg} {;flag}* m`:
//!
//! ```text
//! background  foreground  flags (in this order, only the enabled ones)
//!   40..=47     30..=37     ;1 bold  ;3 italic  ;4 underline  ;8 conceal  ;9 strike
//!   or empty    or empty
//! ```
//!
//! An empty SGR parameter means `0` (reset), so each emission starts from a clean slate
//! and turning a flag off is just emitting the state again without it.

use crate::{BufTextStorage, CSI_PARAM_SEPARATOR, CSI_START, Color, FastStringify,
            SGR_BOLD, SGR_CONCEAL, SGR_END, SGR_ITALIC, SGR_STRIKETHROUGH,
            SGR_UNDERLINE, generate_impl_display_for_fast_stringify};
use std::fmt::{self, Write};

/// Everything that goes into an SGR sequence. Owned by [`Crt`], which re-emits it
/// after every change.
///
/// [`Crt`]: crate::Crt
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatState {
    pub color: Color,
    pub background: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub conceal: bool,
    pub strikethrough: bool,
}

impl FormatState {
    /// The enabled style parameters, in emission order.
    pub fn enabled_flags(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.bold, SGR_BOLD),
            (self.italic, SGR_ITALIC),
            (self.underline, SGR_UNDERLINE),
            (self.conceal, SGR_CONCEAL),
            (self.strikethrough, SGR_STRIKETHROUGH),
        ]
        .into_iter()
        .filter_map(|(enabled, flag)| enabled.then_some(flag))
    }
}

impl FastStringify for FormatState {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> fmt::Result {
        acc.push_str(CSI_START);
        if let Some(code) = self.background.background_code() {
            write!(acc, "{code}")?;
        }
        acc.push(CSI_PARAM_SEPARATOR);
        if let Some(code) = self.color.foreground_code() {
            write!(acc, "{code}")?;
        }
        for flag in self.enabled_flags() {
            acc.push(CSI_PARAM_SEPARATOR);
            acc.push_str(flag);
        }
        acc.push(SGR_END);
        Ok(())
    }
}

generate_impl_display_for_fast_stringify!(FormatState);
