//! Terminal backend for tinyfetch.
//!
//! Turns validated rows and geometry into a box drawn with Unicode
//! line-drawing characters and ANSI colors:
//!
//! - [`measure`]: display width in code points
//! - [`BoxLayout`]: the widest row and the resulting inner box width
//! - [`ColorMode`] / [`Paint`]: named colors to `crossterm` escapes
//! - [`BoxRenderer`]: streams the frame to any [`std::io::Write`]
//! - [`SystemFacts`]: the [`FactSource`] reading the host
//!
//! # Example
//!
//! ```
//! use tinyfetch_core::{Geometry, ModuleKind, Row};
//! use tinyfetch_terminal::{BoxRenderer, ColorMode, FactError};
//!
//! let rows = vec![Row::new(ModuleKind::User)];
//! let geometry = Geometry::default();
//! let facts = |_: &Row| Ok::<_, FactError>("alice".to_string());
//!
//! let mut out = Vec::new();
//! BoxRenderer::new(&geometry, ColorMode::Mono)
//!     .render(&mut out, &rows, &facts)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("│ user │ alice"));
//! ```
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

mod color;
mod error;
pub mod facts;
mod layout;
mod render;
mod width;

pub use color::{to_crossterm, ColorMode, Paint};
pub use error::{FactError, RenderError};
pub use facts::{FactSource, SystemFacts};
pub use layout::{content_width, row_width, BoxLayout};
pub use render::{print_title, BoxRenderer};
pub use width::{measure, measure_opt, measure_with};
