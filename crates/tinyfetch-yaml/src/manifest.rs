//! Raw YAML schema and its validation into [`Config`].

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tinyfetch_core::{
    BorderStyle, Config, Geometry, ModuleKind, NamedColor, Row, SeparatorMode, Title, WidthMode,
};
use tracing::warn;

/// Configuration file as written by the user. Every field is optional here;
/// [`Manifest::validate`] applies defaults and checks required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleSection>>,
}

/// `title:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// `container:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_mode: Option<String>,
}

/// One entry of `modules:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSection {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Manifest {
    /// Parse a manifest from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Serialize the manifest back to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Apply defaults and check required fields.
    ///
    /// `home` is used to expand a leading `~` in `title.filePath`.
    pub fn validate(&self, home: Option<&Path>) -> Result<Config, ParseError> {
        let title = self
            .title
            .as_ref()
            .map(|t| t.validate(home))
            .transpose()?;

        let geometry = match &self.container {
            Some(container) => container.validate()?,
            None => Geometry::default(),
        };

        let modules = match &self.modules {
            Some(modules) if !modules.is_empty() => modules,
            _ => {
                return Err(ParseError::Validation(
                    "modules must contain at least one element".to_string(),
                ))
            }
        };

        let rows = modules
            .iter()
            .enumerate()
            .map(|(i, m)| m.validate(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Config {
            title,
            geometry,
            rows,
        })
    }

    /// Commented starter configuration.
    pub fn default_yaml() -> &'static str {
        r#"# tinyfetch configuration file
# Location: ~/.config/tinyfetch/config.yml
#
# Colors: black, red, green, yellow, blue, magenta, cyan, white

# Optional banner printed above the box
# title:
#   filePath: ~/.config/tinyfetch/logo.txt
#   color: cyan

container:
  marginLeft: 2
  marginRight: 1
  paddingLeft: 1
  paddingRight: 1
  borderColor: white
  # rounded | single | double | heavy | ascii
  borderStyle: rounded
  # between | last | none
  separator: between
  # codepoints | columns
  widthMode: codepoints

# Types: user, hostname, os, kernel, uptime, shell, packages, memory, colors, command
modules:
  - type: user
    labelColor: white
    infoColor: green
  - type: hostname
    labelColor: white
    infoColor: green
  - type: os
    labelColor: white
    infoColor: cyan
  - type: kernel
    labelColor: white
    infoColor: cyan
  - type: uptime
    labelColor: white
    infoColor: yellow
  - type: shell
    labelColor: white
    infoColor: yellow
  - type: memory
    labelColor: white
    infoColor: magenta
  - type: colors
    label: colors
"#
    }
}

impl TitleSection {
    fn validate(&self, home: Option<&Path>) -> Result<Title, ParseError> {
        let file_path = self
            .file_path
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("title.filePath".to_string()))?;

        Ok(Title {
            path: expand_home(file_path, home),
            color: color_or_white("title.color", self.color.as_deref()),
        })
    }
}

/// Largest accepted margin or padding.
pub const MAX_SPACING: usize = u16::MAX as usize;

fn spacing(field: &str, value: Option<usize>, default: usize) -> Result<usize, ParseError> {
    match value {
        Some(n) if n > MAX_SPACING => Err(ParseError::invalid(
            field,
            format!("{n} exceeds the maximum of {MAX_SPACING}"),
        )),
        Some(n) => Ok(n),
        None => Ok(default),
    }
}

impl ContainerSection {
    fn validate(&self) -> Result<Geometry, ParseError> {
        let defaults = Geometry::default();

        let border_style = match self.border_style.as_deref() {
            Some(s) => s
                .parse::<BorderStyle>()
                .map_err(|e| ParseError::invalid("container.borderStyle", e))?,
            None => defaults.border_style,
        };
        let separator = match self.separator.as_deref() {
            Some(s) => s
                .parse::<SeparatorMode>()
                .map_err(|e| ParseError::invalid("container.separator", e))?,
            None => defaults.separator,
        };
        let width_mode = match self.width_mode.as_deref() {
            Some(s) => s
                .parse::<WidthMode>()
                .map_err(|e| ParseError::invalid("container.widthMode", e))?,
            None => defaults.width_mode,
        };

        Ok(Geometry {
            margin_left: spacing("container.marginLeft", self.margin_left, defaults.margin_left)?,
            margin_right: spacing("container.marginRight", self.margin_right, defaults.margin_right)?,
            padding_left: spacing("container.paddingLeft", self.padding_left, defaults.padding_left)?,
            padding_right: spacing(
                "container.paddingRight",
                self.padding_right,
                defaults.padding_right,
            )?,
            border_color: color_or_white("container.borderColor", self.border_color.as_deref())
                .name()
                .to_string(),
            border_style,
            separator,
            width_mode,
        })
    }
}

impl ModuleSection {
    fn validate(&self, index: usize) -> Result<Row, ParseError> {
        let kind = self
            .kind
            .as_deref()
            .ok_or_else(|| ParseError::MissingField(format!("modules[{index}].type")))?
            .parse::<ModuleKind>()
            .map_err(|e| ParseError::invalid(format!("modules[{index}].type"), e))?;

        let mut row = Row::new(kind);

        if kind == ModuleKind::Command {
            let script = self
                .script
                .as_deref()
                .ok_or_else(|| ParseError::MissingField(format!("modules[{index}].script")))?;
            row = row.with_script(script);
        }

        if let Some(label) = &self.label {
            row = row.with_label(label);
        }
        if let Some(prefix) = &self.prefix {
            row = row.with_prefix(prefix);
        }
        let prefix_field = format!("modules[{index}].prefixColor");
        if let Some(color) = optional_color(&prefix_field, self.prefix_color.as_deref()) {
            row = row.with_prefix_color(color.name());
        }
        let label_field = format!("modules[{index}].labelColor");
        if let Some(color) = optional_color(&label_field, self.label_color.as_deref()) {
            row = row.with_label_color(color.name());
        }
        let info_color = color_or_white(
            &format!("modules[{index}].infoColor"),
            self.info_color.as_deref(),
        );

        Ok(row.with_info_color(info_color.name()))
    }
}

/// Colors with a default: absent or unknown names fall back to white.
fn color_or_white(field: &str, name: Option<&str>) -> NamedColor {
    match name {
        Some(name) => NamedColor::from_name(name).unwrap_or_else(|| {
            warn!(field, color = name, "unknown color, using white");
            NamedColor::White
        }),
        None => NamedColor::White,
    }
}

/// Colors without a default: unknown names mean no styling.
fn optional_color(field: &str, name: Option<&str>) -> Option<NamedColor> {
    let name = name?;
    let color = NamedColor::from_name(name);
    if color.is_none() {
        warn!(field, color = name, "unknown color, leaving unstyled");
    }
    color
}

/// Expand a leading `~` to `home`. Paths without one are returned unchanged.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}
