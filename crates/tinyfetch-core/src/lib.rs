//! Core types for tinyfetch.
//!
//! This crate provides the validated data model shared by the loader and the
//! renderer:
//! - Display rows: [`Row`] with its [`ModuleKind`]
//! - Frame geometry: [`Geometry`], [`BorderStyle`], [`SeparatorMode`], [`WidthMode`]
//! - Color names: [`NamedColor`]
//! - The whole run description: [`Config`]
//!
//! Every value here is built once from configuration and then only read.

mod color;
mod config;
mod error;
mod geometry;
mod row;

pub use color::NamedColor;
pub use config::{default_rows, Config, Title};
pub use error::UnknownName;
pub use geometry::{default_geometry, BorderGlyphs, BorderStyle, Geometry, SeparatorMode, WidthMode};
pub use row::{ModuleKind, Row};
