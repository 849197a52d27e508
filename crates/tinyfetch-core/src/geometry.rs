//! Frame geometry: margins, padding and the look of the border.

use crate::error::UnknownName;
use std::str::FromStr;

/// Glyphs used to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// Left end of a separator row.
    pub tee_left: char,
    /// Right end of a separator row.
    pub tee_right: char,
}

/// Border style using Unicode box-drawing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Rounded corners: ╭─╮│├┤╰─╯
    #[default]
    Rounded,
    /// Single line: ┌─┐│├┤└─┘
    Single,
    /// Double line: ╔═╗║╠╣╚═╝
    Double,
    /// Heavy/thick: ┏━┓┃┣┫┗━┛
    Heavy,
    /// ASCII only: +-+|++
    Ascii,
}

impl BorderStyle {
    pub fn all() -> &'static [Self] {
        &[
            Self::Rounded,
            Self::Single,
            Self::Double,
            Self::Heavy,
            Self::Ascii,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Single => "single",
            Self::Double => "double",
            Self::Heavy => "heavy",
            Self::Ascii => "ascii",
        }
    }

    #[must_use]
    pub const fn glyphs(self) -> BorderGlyphs {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical, tee_left, tee_right) =
            match self {
                Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│', '├', '┤'),
                Self::Single => ('┌', '┐', '└', '┘', '─', '│', '├', '┤'),
                Self::Double => ('╔', '╗', '╚', '╝', '═', '║', '╠', '╣'),
                Self::Heavy => ('┏', '┓', '┗', '┛', '━', '┃', '┣', '┫'),
                Self::Ascii => ('+', '+', '+', '+', '-', '|', '+', '+'),
            };
        BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
            tee_left,
            tee_right,
        }
    }
}

impl FromStr for BorderStyle {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| UnknownName::new("border style", s))
    }
}

/// Where separator rows go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorMode {
    /// Before every row except the first.
    #[default]
    Between,
    /// Once, before the final row, when there are at least two rows.
    Last,
    /// Never.
    None,
}

impl SeparatorMode {
    pub fn all() -> &'static [Self] {
        &[Self::Between, Self::Last, Self::None]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::Last => "last",
            Self::None => "none",
        }
    }

    /// Whether a separator is drawn directly above row `index` of `count`.
    pub const fn before(self, index: usize, count: usize) -> bool {
        match self {
            Self::Between => index > 0,
            Self::Last => count > 1 && index + 1 == count,
            Self::None => false,
        }
    }
}

impl FromStr for SeparatorMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownName::new("separator mode", s))
    }
}

/// How label and prefix widths are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthMode {
    /// One unit per Unicode code point.
    #[default]
    CodePoints,
    /// Terminal cell columns; East Asian wide characters count two.
    Columns,
}

impl WidthMode {
    pub fn all() -> &'static [Self] {
        &[Self::CodePoints, Self::Columns]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::CodePoints => "codepoints",
            Self::Columns => "columns",
        }
    }
}

impl FromStr for WidthMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownName::new("width mode", s))
    }
}

/// Margins, padding and border settings of the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    /// Spaces before the left border.
    pub margin_left: usize,
    /// Spaces between the right border and the info text.
    pub margin_right: usize,
    /// Spaces inside the frame before the content.
    pub padding_left: usize,
    /// Spaces inside the frame after the widest content.
    pub padding_right: usize,
    /// Color name for every frame glyph.
    pub border_color: String,
    pub border_style: BorderStyle,
    pub separator: SeparatorMode,
    pub width_mode: WidthMode,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            margin_left: 2,
            margin_right: 1,
            padding_left: 1,
            padding_right: 1,
            border_color: "white".to_string(),
            border_style: BorderStyle::default(),
            separator: SeparatorMode::default(),
            width_mode: WidthMode::default(),
        }
    }
}

/// Fresh default geometry.
pub fn default_geometry() -> Geometry {
    Geometry::default()
}
