// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words clrscr clreol oflush

//! [`Crt`], the context object that ties the terminal mode, the input, the output and
//! the text format together.

use crate::{Color, CrtConfig, CrtResult, CsiSequence, CursorPosition, FormatState,
            OutputDevice, RawModeSwitch, TerminalInput, TerminalModeController,
            TermiosBackend, has_pending_key, lock_output_device_as_mut,
            query_cursor_position, read_key};
use std::{fmt::{Debug, Display},
          time::Duration};

/// Whether the text cursor is shown. Tracked by [`Crt`] since terminals can't be asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVisibility {
    #[default]
    Visible,
    Hidden,
}

/// Console resource toolkit: one terminal, driven through escape sequences.
///
/// - Coordinates are 1-based, `x` is the column and `y` is the row, as in
///   [`goto_xy()`](Self::goto_xy).
/// - Output is written straight to the [`OutputDevice`] and not flushed, except by the
///   cursor query. Call [`oflush()`](Self::oflush) when the user must see it.
/// - Text attributes are kept in a [`FormatState`], and every setter re-emits the whole
///   SGR sequence.
/// - Dropping a `Crt` that is in raw mode puts the terminal back the way it was when the
///   `Crt` was created (through [`TerminalModeController`]'s `Drop`).
///
/// Use [`Crt::new()`] for the real terminal on Unix, or [`Crt::new_with_parts()`] to
/// plug in any [`TermiosBackend`], [`TerminalInput`] and [`OutputDevice`] (e.g. the
/// fixtures in [`crate::core::test_fixtures`]).
pub struct Crt<B: TermiosBackend, I: TerminalInput> {
    mode: TerminalModeController<B>,
    input: I,
    output: OutputDevice,
    format: FormatState,
    cursor_visibility: CursorVisibility,
    config: CrtConfig,
}

/// [`Crt`] on the process's stdin / stdout.
#[cfg(unix)]
pub type StdinCrt = Crt<crate::StdinTermios, crate::StdinInput>;

#[cfg(unix)]
impl Crt<crate::StdinTermios, crate::StdinInput> {
    /// [`Crt`] on stdin / stdout with the default [`CrtConfig`].
    ///
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if stdin is not a terminal.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn new() -> CrtResult<Self> { Self::new_with_config(CrtConfig::default()) }

    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if stdin is not a terminal.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn new_with_config(config: CrtConfig) -> CrtResult<Self> {
        Self::new_with_parts(
            crate::StdinTermios,
            crate::StdinInput::new(),
            OutputDevice::new_stdout(),
            config,
        )
    }
}

impl<B: TermiosBackend, I: TerminalInput> Crt<B, I> {
    /// # Errors
    ///
    /// [`CrtError::TerminalUnavailable`] if `backend` can't capture the startup
    /// configuration.
    ///
    /// [`CrtError::TerminalUnavailable`]: crate::CrtError::TerminalUnavailable
    pub fn new_with_parts(
        backend: B,
        input: I,
        output: OutputDevice,
        config: CrtConfig,
    ) -> CrtResult<Self> {
        Ok(Self {
            mode: TerminalModeController::new(backend)?,
            input,
            output,
            format: FormatState::default(),
            cursor_visibility: CursorVisibility::default(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CrtConfig { &self.config }

    #[must_use]
    pub fn mode_controller(&self) -> &TerminalModeController<B> { &self.mode }

    /// Sleep for `ms` milliseconds. Needs no terminal.
    pub fn delay(ms: u64) { std::thread::sleep(Duration::from_millis(ms)); }

    fn write_display(&self, it: &impl Display) -> CrtResult<()> {
        let out = lock_output_device_as_mut!(self.output);
        write!(out, "{it}")?;
        Ok(())
    }

    /// Write text at the cursor, with the current format.
    ///
    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn write_str(&mut self, text: &str) -> CrtResult<()> {
        let out = lock_output_device_as_mut!(self.output);
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the flush fails.
    pub fn oflush(&mut self) -> CrtResult<()> {
        lock_output_device_as_mut!(self.output).flush()?;
        Ok(())
    }
}

/// Cursor.
impl<B: TermiosBackend, I: TerminalInput> Crt<B, I> {
    /// Move the cursor to column `x`, row `y` (both 1-based).
    ///
    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn goto_xy(&mut self, x: u32, y: u32) -> CrtResult<()> {
        self.write_display(&CsiSequence::MoveCursor { row: y, col: x })
    }

    /// Ask the terminal where the cursor is. See [`query_cursor_position()`].
    ///
    /// # Errors
    ///
    /// See [`query_cursor_position()`].
    pub fn cursor_position(&mut self) -> CrtResult<CursorPosition> {
        query_cursor_position(
            &mut self.mode,
            &self.output,
            &mut self.input,
            self.config.cursor_query_timeout,
        )
    }

    /// The cursor's row (1-based). Queries the terminal every time.
    ///
    /// # Errors
    ///
    /// See [`query_cursor_position()`].
    pub fn cursor_row(&mut self) -> CrtResult<u32> { Ok(self.cursor_position()?.row) }

    /// The cursor's column (1-based). Queries the terminal every time.
    ///
    /// # Errors
    ///
    /// See [`query_cursor_position()`].
    pub fn cursor_col(&mut self) -> CrtResult<u32> { Ok(self.cursor_position()?.col) }

    /// Same as [`cursor_col()`](Self::cursor_col).
    ///
    /// # Errors
    ///
    /// See [`query_cursor_position()`].
    pub fn where_x(&mut self) -> CrtResult<u32> { self.cursor_col() }

    /// Same as [`cursor_row()`](Self::cursor_row).
    ///
    /// # Errors
    ///
    /// See [`query_cursor_position()`].
    pub fn where_y(&mut self) -> CrtResult<u32> { self.cursor_row() }

    /// `(x, y)`, i.e. `(column, row)`, ready to hand back to
    /// [`goto_xy()`](Self::goto_xy). For named fields use
    /// [`cursor_position()`](Self::cursor_position).
    ///
    /// # Errors
    ///
    /// See [`query_cursor_position()`].
    pub fn where_xy(&mut self) -> CrtResult<(u32, u32)> {
        Ok(self.cursor_position()?.as_xy())
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn hide_cursor(&mut self) -> CrtResult<()> {
        self.write_display(&CsiSequence::HideCursor)?;
        self.cursor_visibility = CursorVisibility::Hidden;
        Ok(())
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn show_cursor(&mut self) -> CrtResult<()> {
        self.write_display(&CsiSequence::ShowCursor)?;
        self.cursor_visibility = CursorVisibility::Visible;
        Ok(())
    }

    /// What the last [`hide_cursor()`](Self::hide_cursor) /
    /// [`show_cursor()`](Self::show_cursor) did. Visible initially.
    #[must_use]
    pub fn cursor_visibility(&self) -> CursorVisibility { self.cursor_visibility }
}

/// Screen.
impl<B: TermiosBackend, I: TerminalInput> Crt<B, I> {
    /// Clear the screen and move the cursor to the top left corner.
    ///
    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn clrscr(&mut self) -> CrtResult<()> {
        self.write_display(&CsiSequence::ClearScreen)?;
        self.write_display(&CsiSequence::CursorHome)
    }

    /// Clear from the cursor to the end of the line.
    ///
    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn clreol(&mut self) -> CrtResult<()> {
        self.write_display(&CsiSequence::ClearToEndOfLine)
    }
}

/// Text format.
impl<B: TermiosBackend, I: TerminalInput> Crt<B, I> {
    #[must_use]
    pub fn format(&self) -> &FormatState { &self.format }

    fn update_format(&mut self, update: impl FnOnce(&mut FormatState)) -> CrtResult<()> {
        update(&mut self.format);
        self.write_display(&self.format)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn text_color(&mut self, color: Color) -> CrtResult<()> {
        self.update_format(|it| it.color = color)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn text_background(&mut self, color: Color) -> CrtResult<()> {
        self.update_format(|it| it.background = color)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn set_bold(&mut self, enabled: bool) -> CrtResult<()> {
        self.update_format(|it| it.bold = enabled)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn set_italic(&mut self, enabled: bool) -> CrtResult<()> {
        self.update_format(|it| it.italic = enabled)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn set_underline(&mut self, enabled: bool) -> CrtResult<()> {
        self.update_format(|it| it.underline = enabled)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn set_conceal(&mut self, enabled: bool) -> CrtResult<()> {
        self.update_format(|it| it.conceal = enabled)
    }

    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn set_strikethrough(&mut self, enabled: bool) -> CrtResult<()> {
        self.update_format(|it| it.strikethrough = enabled)
    }

    /// Emit `ESC[0m` and forget all colors and styles.
    ///
    /// # Errors
    ///
    /// [`CrtError::Io`](crate::CrtError::Io) if the write fails.
    pub fn format_reset(&mut self) -> CrtResult<()> {
        self.write_display(&CsiSequence::SgrReset)?;
        self.format = FormatState::default();
        Ok(())
    }
}

/// Raw mode and keys.
impl<B: TermiosBackend, I: TerminalInput> Crt<B, I> {
    #[must_use]
    pub fn is_raw(&self) -> bool { self.mode.is_raw() }

    /// # Errors
    ///
    /// See [`TerminalModeController::raw_on()`].
    pub fn raw_on(&mut self) -> CrtResult<()> { self.mode.raw_on() }

    /// # Errors
    ///
    /// See [`TerminalModeController::raw_off()`].
    pub fn raw_off(&mut self) -> CrtResult<()> { self.mode.raw_off() }

    /// Whether a key is waiting, after up to [`CrtConfig::key_poll_wait`].
    ///
    /// # Errors
    ///
    /// See [`has_pending_key()`].
    pub fn pend_key(&mut self) -> CrtResult<bool> {
        has_pending_key(&self.mode, &mut self.input, self.config.key_poll_wait)
    }

    /// Block until a key arrives, and return its first byte.
    ///
    /// # Errors
    ///
    /// See [`read_key()`](crate::read_key()).
    pub fn read_key(&mut self) -> CrtResult<u8> { read_key(&self.mode, &mut self.input) }
}

/// Skips `output`, which is a `dyn Write`.
impl<B: TermiosBackend, I: TerminalInput + Debug> Debug for Crt<B, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crt")
            .field("mode", &self.mode)
            .field("input", &self.input)
            .field("format", &self.format)
            .field("cursor_visibility", &self.cursor_visibility)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<B: TermiosBackend, I: TerminalInput> RawModeSwitch for Crt<B, I> {
    fn is_raw(&self) -> bool { Crt::is_raw(self) }

    fn raw_on(&mut self) -> CrtResult<()> { Crt::raw_on(self) }

    fn raw_off(&mut self) -> CrtResult<()> { Crt::raw_off(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CrtError, MockTermios, MockTermiosConfig, OutputDeviceExt, RawModeGuard,
                ScriptedInput, StdoutMock};
    use pretty_assertions::assert_eq;

    type MockCrt = Crt<MockTermios, ScriptedInput>;

    struct Fixture {
        crt: MockCrt,
        termios: MockTermios,
        input: ScriptedInput,
        stdout_mock: StdoutMock,
    }

    fn fixture() -> Fixture {
        let termios = MockTermios::new(MockTermiosConfig::cooked(1));
        let input = ScriptedInput::new();
        let (output, stdout_mock) = OutputDevice::new_mock();
        let config = CrtConfig::default()
            .with_cursor_query_timeout(Duration::from_millis(50))
            .with_key_poll_wait(Duration::ZERO);
        let crt =
            Crt::new_with_parts(termios.clone(), input.clone(), output, config).unwrap();
        Fixture {
            crt,
            termios,
            input,
            stdout_mock,
        }
    }

    #[test]
    fn test_goto_xy_is_column_then_row() {
        let mut it = fixture();
        it.crt.goto_xy(10, 5).unwrap();
        assert_eq!(it.stdout_mock.get_copy_of_buffer_as_string(), "\x1b[5;10H");
    }

    #[test]
    fn test_clrscr_clears_then_homes() {
        let mut it = fixture();
        it.crt.clrscr().unwrap();
        it.crt.clreol().unwrap();
        assert_eq!(
            it.stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[2J\x1b[1;1H\x1b[0K"
        );
    }

    #[test]
    fn test_cursor_visibility_tracks_last_call() {
        let mut it = fixture();
        assert_eq!(it.crt.cursor_visibility(), CursorVisibility::Visible);

        it.crt.hide_cursor().unwrap();
        assert_eq!(it.crt.cursor_visibility(), CursorVisibility::Hidden);

        it.crt.show_cursor().unwrap();
        assert_eq!(it.crt.cursor_visibility(), CursorVisibility::Visible);
        assert_eq!(
            it.stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[?25l\x1b[?25h"
        );
    }

    #[test]
    fn test_format_setters_reemit_full_sgr() {
        let mut it = fixture();

        it.crt.text_color(Color::Red).unwrap();
        it.crt.set_bold(true).unwrap();
        it.stdout_mock.clear();
        it.crt.set_underline(true).unwrap();

        assert_eq!(it.stdout_mock.get_copy_of_buffer_as_string(), "\x1b[;31;1;4m");
        assert_eq!(it.crt.format().color, Color::Red);
    }

    #[test]
    fn test_format_flags_off_again() {
        let mut it = fixture();
        it.crt.text_background(Color::Blue).unwrap();
        it.crt.set_italic(true).unwrap();
        it.crt.set_conceal(true).unwrap();
        it.crt.set_strikethrough(true).unwrap();
        it.stdout_mock.clear();

        it.crt.set_italic(false).unwrap();

        assert_eq!(it.stdout_mock.get_copy_of_buffer_as_string(), "\x1b[44;;8;9m");
    }

    #[test]
    fn test_format_reset_emits_reset_and_clears_state() {
        let mut it = fixture();
        it.crt.text_color(Color::Green).unwrap();
        it.crt.set_bold(true).unwrap();
        it.stdout_mock.clear();

        it.crt.format_reset().unwrap();

        assert_eq!(it.stdout_mock.get_copy_of_buffer_as_string(), "\x1b[0m");
        assert_eq!(*it.crt.format(), FormatState::default());
    }

    #[test]
    fn test_write_str_is_plain_text() {
        let mut it = fixture();
        it.crt.text_color(Color::Cyan).unwrap();
        it.crt.write_str("hello").unwrap();
        it.crt.oflush().unwrap();
        assert_eq!(
            it.stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "hello"
        );
    }

    #[test]
    fn test_where_accessors() {
        let mut it = fixture();
        it.input.push_bytes(b"\x1b[3;7R\x1b[3;7R\x1b[3;7R\x1b[3;7R\x1b[3;7R");

        assert_eq!(it.crt.cursor_position().unwrap(), CursorPosition { row: 3, col: 7 });
        assert_eq!(it.crt.where_x().unwrap(), 7);
        assert_eq!(it.crt.where_y().unwrap(), 3);
        assert_eq!(it.crt.where_xy().unwrap(), (7, 3));
        assert_eq!(it.crt.cursor_row().unwrap(), 3);
        assert!(!it.crt.is_raw());
    }

    #[test]
    fn test_cursor_position_timeout_uses_config() {
        let mut it = fixture();
        let result = it.crt.cursor_position();
        assert!(matches!(
            result,
            Err(CrtError::CursorQueryTimeout { timeout, .. })
                if timeout == Duration::from_millis(50)
        ));
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_keys_require_raw_mode() {
        let mut it = fixture();
        it.input.push_bytes(b"k");

        assert!(matches!(
            it.crt.pend_key(),
            Err(CrtError::RawModeRequired { .. })
        ));
        assert!(matches!(
            it.crt.read_key(),
            Err(CrtError::RawModeRequired { .. })
        ));
        assert_eq!(it.input.read_count(), 0);

        it.crt.raw_on().unwrap();
        assert!(it.crt.pend_key().unwrap());
        assert_eq!(it.crt.read_key().unwrap(), b'k');
        assert!(!it.crt.pend_key().unwrap());
        it.crt.raw_off().unwrap();

        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_raw_mode_guard_over_crt() {
        let mut it = fixture();
        it.input.push_bytes(b"z");
        {
            let mut guard = RawModeGuard::new(&mut it.crt).unwrap();
            assert_eq!(guard.read_key().unwrap(), b'z');
        }
        assert!(!it.crt.is_raw());
        assert_eq!(it.termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_drop_while_raw_restores_startup_config() {
        let it = fixture();
        let Fixture {
            mut crt, termios, ..
        } = it;
        crt.raw_on().unwrap();
        drop(crt);
        assert_eq!(termios.current(), MockTermiosConfig::cooked(1));
    }

    #[test]
    fn test_delay_sleeps() {
        let start = std::time::Instant::now();
        MockCrt::delay(2);
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn test_debug_shows_state_without_output() {
        let mut it = fixture();
        it.crt.hide_cursor().unwrap();

        let debug = format!("{:?}", it.crt);

        assert!(debug.starts_with("Crt {"));
        assert!(debug.contains("cursor_visibility: Hidden"));
        assert!(!debug.contains("output"));
        assert!(debug.ends_with(".. }"));
    }
}
