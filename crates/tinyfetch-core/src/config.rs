//! The validated description of one run.

use crate::color::NamedColor;
use crate::geometry::Geometry;
use crate::row::{ModuleKind, Row};
use std::path::PathBuf;

/// Banner printed verbatim above the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// File whose contents are printed, `~` already expanded.
    pub path: PathBuf,
    pub color: NamedColor,
}

/// Everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: Option<Title>,
    pub geometry: Geometry,
    /// Never empty once validated.
    pub rows: Vec<Row>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            geometry: Geometry::default(),
            rows: default_rows(),
        }
    }
}

/// Rows used when no configuration file exists.
pub fn default_rows() -> Vec<Row> {
    vec![Row::new(ModuleKind::User)
        .with_label_color(NamedColor::White.name())
        .with_info_color(NamedColor::White.name())]
}
