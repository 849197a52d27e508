//! Streaming box renderer.
//!
//! Draws, top to bottom:
//!
//! ```text
//!   ╭──────────╮
//!   │ hostname │ box
//!   ├──────────┤
//!   │ os       │ Arch Linux
//!   ╰──────────╯
//! ```
//!
//! Each content row is written only after its fact has been collected, so a
//! failing collector leaves the rows above it on screen.

use crate::color::{ColorMode, Paint};
use crate::error::RenderError;
use crate::facts::FactSource;
use crate::layout::BoxLayout;
use std::fs;
use std::io::Write;
use tinyfetch_core::{BorderGlyphs, Geometry, Row, Title};
use tracing::debug;

/// Renders one box from rows and geometry.
#[derive(Debug, Clone, Copy)]
pub struct BoxRenderer<'a> {
    geometry: &'a Geometry,
    mode: ColorMode,
}

impl<'a> BoxRenderer<'a> {
    #[must_use]
    pub const fn new(geometry: &'a Geometry, mode: ColorMode) -> Self {
        Self { geometry, mode }
    }

    /// Write the whole frame to `out`.
    pub fn render<W, F>(&self, out: &mut W, rows: &[Row], facts: &F) -> Result<(), RenderError>
    where
        W: Write,
        F: FactSource + ?Sized,
    {
        let layout = BoxLayout::compute(rows, self.geometry);
        debug!(
            rows = rows.len(),
            max_len = layout.max_len,
            box_width = layout.box_width,
            "computed box layout"
        );

        let glyphs = self.geometry.border_style.glyphs();
        let border = self.mode.resolve(Some(self.geometry.border_color.as_str()));

        self.rule(out, &layout, border, glyphs.top_left, glyphs.horizontal, glyphs.top_right)?;

        for (index, row) in rows.iter().enumerate() {
            let info = facts.collect(row)?;

            if self.geometry.separator.before(index, rows.len()) {
                self.rule(out, &layout, border, glyphs.tee_left, glyphs.horizontal, glyphs.tee_right)?;
            }
            self.content_row(out, &layout, border, &glyphs, row, &info)?;
        }

        self.rule(
            out,
            &layout,
            border,
            glyphs.bottom_left,
            glyphs.horizontal,
            glyphs.bottom_right,
        )?;
        out.flush()?;
        Ok(())
    }

    /// Top, bottom or separator line.
    fn rule<W: Write>(
        &self,
        out: &mut W,
        layout: &BoxLayout,
        border: Paint,
        left: char,
        fill: char,
        right: char,
    ) -> Result<(), RenderError> {
        let mut line = String::with_capacity(layout.box_width + 2);
        line.push(left);
        line.extend(std::iter::repeat(fill).take(layout.box_width));
        line.push(right);

        write_spaces(out, self.geometry.margin_left)?;
        border.write(out, &line)?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn content_row<W: Write>(
        &self,
        out: &mut W,
        layout: &BoxLayout,
        border: Paint,
        glyphs: &BorderGlyphs,
        row: &Row,
        info: &str,
    ) -> Result<(), RenderError> {
        let vertical = glyphs.vertical.to_string();

        write_spaces(out, self.geometry.margin_left)?;
        border.write(out, &vertical)?;
        write_spaces(out, self.geometry.padding_left)?;

        if let Some(prefix) = row.prefix() {
            self.mode.resolve(row.prefix_color()).write(out, prefix)?;
        }
        self.mode.resolve(row.label_color()).write(out, row.label())?;

        write_spaces(out, layout.fill(row, self.geometry))?;
        border.write(out, &vertical)?;

        if !info.is_empty() {
            write_spaces(out, self.geometry.margin_right)?;
            self.mode.resolve(row.info_color()).write(out, info)?;
        }
        out.write_all(b"\n")?;
        Ok(())
    }
}

fn write_spaces<W: Write>(out: &mut W, count: usize) -> std::io::Result<()> {
    write!(out, "{:count$}", "")
}

/// Print the title file verbatim in its color. The bytes are not required to
/// be UTF-8.
pub fn print_title<W: Write>(out: &mut W, title: &Title, mode: ColorMode) -> Result<(), RenderError> {
    let contents = fs::read(&title.path).map_err(|source| RenderError::Title {
        path: title.path.clone(),
        source,
    })?;
    mode.named(title.color).write_bytes(out, &contents)?;
    Ok(())
}
