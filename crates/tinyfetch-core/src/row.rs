//! Display rows and the module kinds that feed them.

use crate::error::UnknownName;
use std::fmt;
use std::str::FromStr;

/// Kind of fact a row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    User,
    Hostname,
    Os,
    Kernel,
    Uptime,
    Shell,
    Packages,
    Memory,
    Colors,
    /// Output of a user supplied shell script.
    Command,
}

impl ModuleKind {
    /// All kinds in documentation order.
    pub fn all() -> &'static [Self] {
        &[
            Self::User,
            Self::Hostname,
            Self::Os,
            Self::Kernel,
            Self::Uptime,
            Self::Shell,
            Self::Packages,
            Self::Memory,
            Self::Colors,
            Self::Command,
        ]
    }

    /// Configuration keyword, also the default label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Hostname => "hostname",
            Self::Os => "os",
            Self::Kernel => "kernel",
            Self::Uptime => "uptime",
            Self::Shell => "shell",
            Self::Packages => "packages",
            Self::Memory => "memory",
            Self::Colors => "colors",
            Self::Command => "command",
        }
    }
}

impl FromStr for ModuleKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownName::new("module type", s))
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One configured line of the box.
///
/// Colors are kept as the names written in the configuration. Resolving them
/// happens at render time, where an unknown name simply means "no styling".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    kind: ModuleKind,
    label: String,
    prefix: Option<String>,
    prefix_color: Option<String>,
    label_color: Option<String>,
    info_color: Option<String>,
    script: Option<String>,
}

impl Row {
    /// Create a row labelled with the kind's own name.
    #[must_use]
    pub fn new(kind: ModuleKind) -> Self {
        Self {
            kind,
            label: kind.name().to_string(),
            prefix: None,
            prefix_color: None,
            label_color: None,
            info_color: None,
            script: None,
        }
    }

    /// Create a `command` row running `script`.
    #[must_use]
    pub fn command(script: impl Into<String>) -> Self {
        Self::new(ModuleKind::Command).with_script(script)
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the decorative prefix shown before the label.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the prefix color name.
    #[must_use]
    pub fn with_prefix_color(mut self, color: impl Into<String>) -> Self {
        self.prefix_color = Some(color.into());
        self
    }

    /// Set the label color name.
    #[must_use]
    pub fn with_label_color(mut self, color: impl Into<String>) -> Self {
        self.label_color = Some(color.into());
        self
    }

    /// Set the info color name.
    #[must_use]
    pub fn with_info_color(mut self, color: impl Into<String>) -> Self {
        self.info_color = Some(color.into());
        self
    }

    /// Set the script executed by a `command` row.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn prefix_color(&self) -> Option<&str> {
        self.prefix_color.as_deref()
    }

    pub fn label_color(&self) -> Option<&str> {
        self.label_color.as_deref()
    }

    pub fn info_color(&self) -> Option<&str> {
        self.info_color.as_deref()
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }
}
