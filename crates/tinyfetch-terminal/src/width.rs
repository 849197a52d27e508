//! Display width of labels and prefixes.

use tinyfetch_core::WidthMode;
use unicode_width::UnicodeWidthStr;

/// Width in Unicode code points. A three-byte `é` counts as one, like `e`.
pub fn measure(text: &str) -> usize {
    text.chars().count()
}

/// Width of `text` under `mode`.
pub fn measure_with(text: &str, mode: WidthMode) -> usize {
    match mode {
        WidthMode::CodePoints => measure(text),
        WidthMode::Columns => UnicodeWidthStr::width(text),
    }
}

/// Width of an optional element; absent text is zero wide.
pub fn measure_opt(text: Option<&str>, mode: WidthMode) -> usize {
    text.map_or(0, |t| measure_with(t, mode))
}
