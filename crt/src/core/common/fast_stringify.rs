// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Trait for building escape sequences into a reusable buffer. See [`FastStringify`]
//! and [`BufTextStorage`] for details.

use std::fmt::{Display, Formatter, Result};

/// Buffer that [`FastStringify`] implementations append to.
pub type BufTextStorage = String;

/// String building for escape sequences that avoids one formatter dispatch per piece.
///
/// Implement [`write_to_buf()`] with [`push_str`] / [`push`] (and [`write!`] only
/// when a number needs formatting), then get [`Display`] for free with
/// [`generate_impl_display_for_fast_stringify!`].
///
/// ```rust
/// use r3bl_crt::{BufTextStorage, FastStringify, generate_impl_display_for_fast_stringify};
/// use std::fmt::Result;
///
/// struct Bell;
///
/// impl FastStringify for Bell {
///     fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
///         acc.push('\x07');
///         Ok(())
///     }
/// }
///
/// generate_impl_display_for_fast_stringify!(Bell);
///
/// assert_eq!(Bell.to_string(), "\x07");
/// ```
///
/// [`write_to_buf()`]: FastStringify::write_to_buf
/// [`push_str`]: String::push_str
/// [`push`]: String::push
/// [`write!`]: std::write
/// [`generate_impl_display_for_fast_stringify!`]: crate::generate_impl_display_for_fast_stringify
pub trait FastStringify: Display {
    /// Write the formatted representation to the buffer.
    ///
    /// # Errors
    /// Returns an error if writing to the buffer fails (formatting error).
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Write the buffer to formatter. Call from [`Display::fmt`] after
    /// [`write_to_buf`].
    ///
    /// # Errors
    /// Returns an error if writing to the formatter fails (formatting error).
    ///
    /// [`write_to_buf`]: FastStringify::write_to_buf
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}

/// Implements [`Display`] for a type that implements [`FastStringify`].
#[macro_export]
macro_rules! generate_impl_display_for_fast_stringify {
    ($type:ty) => {
        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut acc = $crate::BufTextStorage::new();
                $crate::FastStringify::write_to_buf(self, &mut acc)?;
                $crate::FastStringify::write_buf_to_fmt(self, &acc, f)
            }
        }
    };
}
