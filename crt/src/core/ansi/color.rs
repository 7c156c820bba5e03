// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 8 base ANSI colors, plus [`Color::Default`] which means "leave it to the
//! terminal".

use crate::{SGR_BG_BASE, SGR_FG_BASE};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Colors for [`Crt::text_color()`] and [`Crt::text_background()`].
///
/// The discriminant is the ANSI color index. [`Color::Default`] is `-1` and is omitted
/// from the generated SGR sequence, which makes the terminal fall back to its own
/// default foreground / background.
///
/// [`Crt::text_color()`]: crate::Crt::text_color
/// [`Crt::text_background()`]: crate::Crt::text_background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(i8)]
pub enum Color {
    #[default]
    Default = -1,
    Black = 0,
    Red = 1,
    Green = 2,
    /// Index 3. Most terminals render this as yellow.
    Brown = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// The ANSI color index (`0..=7`), or [`None`] for [`Color::Default`].
    #[must_use]
    pub fn index(self) -> Option<u8> { u8::try_from(self as i8).ok() }

    /// SGR parameter that selects this color as the foreground (`30..=37`).
    #[must_use]
    pub fn foreground_code(self) -> Option<u8> {
        self.index().map(|it| SGR_FG_BASE + it)
    }

    /// SGR parameter that selects this color as the background (`40..=47`).
    #[must_use]
    pub fn background_code(self) -> Option<u8> {
        self.index().map(|it| SGR_BG_BASE + it)
    }

    /// Look up a color by its numeric value (`-1..=7`).
    #[must_use]
    pub fn from_value(value: i8) -> Option<Self> {
        Color::iter().find(|it| *it as i8 == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Color::Black, Some(30), Some(40))]
    #[test_case(Color::Red, Some(31), Some(41))]
    #[test_case(Color::Brown, Some(33), Some(43))]
    #[test_case(Color::White, Some(37), Some(47))]
    #[test_case(Color::Default, None, None)]
    fn test_sgr_codes(color: Color, fg: Option<u8>, bg: Option<u8>) {
        assert_eq!(color.foreground_code(), fg);
        assert_eq!(color.background_code(), bg);
    }

    #[test]
    fn test_from_value_round_trips_every_color() {
        for color in Color::iter() {
            assert_eq!(Color::from_value(color as i8), Some(color));
        }
        assert_eq!(Color::from_value(8), None);
        assert_eq!(Color::from_value(-2), None);
    }

    #[test]
    fn test_default_is_default() {
        assert_eq!(Color::default(), Color::Default);
        assert_eq!(Color::Default.index(), None);
    }
}
