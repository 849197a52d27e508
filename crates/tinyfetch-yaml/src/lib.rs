//! YAML configuration loader for tinyfetch.
//!
//! Parses the user's `config.yml` into a [`Manifest`], then validates it into
//! a [`tinyfetch_core::Config`] with every default applied.

mod error;
mod loader;
mod manifest;

pub use error::ParseError;
pub use loader::{config_paths, config_paths_from, home_dir, load, load_from_file};
pub use manifest::{
    expand_home, ContainerSection, Manifest, ModuleSection, TitleSection, MAX_SPACING,
};
