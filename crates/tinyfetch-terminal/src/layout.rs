//! Box geometry: the one width every row is padded to.

use crate::width::{measure_opt, measure_with};
use tinyfetch_core::{Geometry, Row, WidthMode};

/// Widths computed once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxLayout {
    /// Widest `prefix + label` over all rows.
    pub max_len: usize,
    /// Inner width of the frame: `max_len + padding_left + padding_right`.
    pub box_width: usize,
}

impl BoxLayout {
    #[must_use]
    pub fn compute(rows: &[Row], geometry: &Geometry) -> Self {
        let max_len = content_width(rows, geometry.width_mode);
        Self {
            max_len,
            box_width: max_len
                .saturating_add(geometry.padding_left)
                .saturating_add(geometry.padding_right),
        }
    }

    /// Spaces between a row's content and its right border.
    pub fn fill(&self, row: &Row, geometry: &Geometry) -> usize {
        self.box_width
            .saturating_sub(geometry.padding_left)
            .saturating_sub(row_width(row, geometry.width_mode))
    }

    /// Visible width of every frame line, margin and both borders included.
    pub const fn line_width(&self, geometry: &Geometry) -> usize {
        geometry.margin_left.saturating_add(self.box_width).saturating_add(2)
    }
}

/// Width of one row's prefix plus label.
pub fn row_width(row: &Row, mode: WidthMode) -> usize {
    measure_with(row.label(), mode) + measure_opt(row.prefix(), mode)
}

/// Maximum [`row_width`] over `rows`, 0 when empty.
pub fn content_width(rows: &[Row], mode: WidthMode) -> usize {
    rows.iter().map(|r| row_width(r, mode)).max().unwrap_or(0)
}
