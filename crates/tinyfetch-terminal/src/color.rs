//! Color mode detection and named-color resolution.

use crossterm::style::{
    Color as CrosstermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor, Stylize,
};
use crossterm::{queue, style};
use std::io::{self, IsTerminal, Write};
use tinyfetch_core::NamedColor;

/// Whether escape sequences are written at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 8-color ANSI escapes.
    #[default]
    Ansi,
    /// Monochrome (no color).
    Mono,
}

impl ColorMode {
    /// Auto-detect from stdout, `NO_COLOR` and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_for(io::stdout().is_terminal())
    }

    /// Mono when the output is not a terminal, else [`ColorMode::detect_with_env`].
    #[must_use]
    pub fn detect_for(is_terminal: bool) -> Self {
        if !is_terminal {
            return Self::Mono;
        }
        Self::detect_with_env(std::env::var("NO_COLOR").ok(), std::env::var("TERM").ok())
    }

    /// Detect color mode from environment variable values.
    /// This is the testable core of `detect()`.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn detect_with_env(no_color: Option<String>, term: Option<String>) -> Self {
        // https://no-color.org: any non-empty value disables color
        if no_color.is_some_and(|v| !v.is_empty()) {
            return Self::Mono;
        }

        match term.as_deref() {
            Some("dumb") | None => Self::Mono,
            _ => Self::Ansi,
        }
    }

    /// Resolve a configured color name into a paint for this mode.
    ///
    /// Unknown, empty or absent names give [`Paint::NEUTRAL`]; so does every
    /// name in [`ColorMode::Mono`].
    #[must_use]
    pub fn resolve(self, name: Option<&str>) -> Paint {
        match self {
            Self::Ansi => Paint::resolve(name),
            Self::Mono => Paint::NEUTRAL,
        }
    }

    /// Paint for a color already validated by the loader.
    #[must_use]
    pub fn named(self, color: NamedColor) -> Paint {
        self.resolve(Some(color.name()))
    }
}

/// The standard (non-bright) ANSI color for a configuration name.
///
/// crossterm writes these as 256-color palette indices 0-7 (`ESC[38;5;Nm`).
#[must_use]
pub const fn to_crossterm(color: NamedColor) -> CrosstermColor {
    match color {
        NamedColor::Black => CrosstermColor::Black,
        NamedColor::Red => CrosstermColor::DarkRed,
        NamedColor::Green => CrosstermColor::DarkGreen,
        NamedColor::Yellow => CrosstermColor::DarkYellow,
        NamedColor::Blue => CrosstermColor::DarkBlue,
        NamedColor::Magenta => CrosstermColor::DarkMagenta,
        NamedColor::Cyan => CrosstermColor::DarkCyan,
        NamedColor::White => CrosstermColor::Grey,
    }
}

/// Resolved style handle for one printed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    foreground: Option<CrosstermColor>,
    background: Option<CrosstermColor>,
}

impl Paint {
    /// No styling; text is written as is.
    pub const NEUTRAL: Self = Self {
        foreground: None,
        background: None,
    };

    /// Foreground paint for a color name. Never fails.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(NamedColor::from_name)
            .map_or(Self::NEUTRAL, Self::foreground)
    }

    #[must_use]
    pub const fn foreground(color: NamedColor) -> Self {
        Self {
            foreground: Some(to_crossterm(color)),
            background: None,
        }
    }

    #[must_use]
    pub const fn background(color: NamedColor) -> Self {
        Self {
            foreground: None,
            background: Some(to_crossterm(color)),
        }
    }

    pub const fn is_neutral(&self) -> bool {
        self.foreground.is_none() && self.background.is_none()
    }

    pub const fn foreground_color(&self) -> Option<CrosstermColor> {
        self.foreground
    }

    pub const fn background_color(&self) -> Option<CrosstermColor> {
        self.background
    }

    /// Queue `text` wrapped in this paint's escapes.
    pub fn write<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.is_neutral() {
            return queue!(out, Print(text));
        }
        if let Some(fg) = self.foreground {
            queue!(out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = self.background {
            queue!(out, SetBackgroundColor(bg))?;
        }
        queue!(out, Print(text), ResetColor)
    }

    /// Like [`Paint::write`] for text that need not be UTF-8.
    pub fn write_bytes<W: Write>(&self, out: &mut W, bytes: &[u8]) -> io::Result<()> {
        if let Some(fg) = self.foreground {
            queue!(out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = self.background {
            queue!(out, SetBackgroundColor(bg))?;
        }
        out.write_all(bytes)?;
        if self.is_neutral() {
            return Ok(());
        }
        queue!(out, ResetColor)
    }

    /// `text` wrapped in this paint's escapes, as a string.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        let mut styled = style::style(text);
        if let Some(fg) = self.foreground {
            styled = styled.with(fg);
        }
        if let Some(bg) = self.background {
            styled = styled.on(bg);
        }
        styled.to_string()
    }
}
