//! Fact collectors: one line of host information per module kind.
//!
//! Collectors for built-in kinds never fail; when a source is unavailable they
//! return `"unknown"` (or an empty string for `user`). Only the `command`
//! module can fail, and that failure aborts the run.

use crate::color::{ColorMode, Paint};
use crate::error::FactError;
use std::fs;
use std::process::Command;
use sysinfo::System;
use tinyfetch_core::{ModuleKind, NamedColor, Row};
use tracing::{debug, warn};

const UNKNOWN: &str = "unknown";

/// Lookup from a row to the text shown in its info column.
pub trait FactSource {
    /// Single line of text, no trailing newline.
    fn collect(&self, row: &Row) -> Result<String, FactError>;
}

impl<F> FactSource for F
where
    F: Fn(&Row) -> Result<String, FactError>,
{
    fn collect(&self, row: &Row) -> Result<String, FactError> {
        self(row)
    }
}

/// Facts about the machine we are running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFacts {
    mode: ColorMode,
}

impl SystemFacts {
    /// `mode` controls whether the `colors` swatch emits escapes.
    #[must_use]
    pub const fn new(mode: ColorMode) -> Self {
        Self { mode }
    }
}

impl FactSource for SystemFacts {
    fn collect(&self, row: &Row) -> Result<String, FactError> {
        let info = match row.kind() {
            ModuleKind::User => user_from(std::env::var("USER").ok(), std::env::var("USERNAME").ok()),
            ModuleKind::Hostname => or_unknown("hostname", System::host_name()),
            ModuleKind::Os => os_name(),
            ModuleKind::Kernel => or_unknown("kernel", System::kernel_version()),
            ModuleKind::Uptime => format_uptime(System::uptime()),
            ModuleKind::Shell => shell_name(std::env::var("SHELL").ok().as_deref()),
            ModuleKind::Packages => or_unknown("packages", count_packages()),
            ModuleKind::Memory => or_unknown("memory", memory()),
            ModuleKind::Colors => swatch(self.mode),
            ModuleKind::Command => run_command(row.script().ok_or(FactError::MissingScript)?)?,
        };
        Ok(info)
    }
}

fn or_unknown(fact: &str, value: Option<String>) -> String {
    value.unwrap_or_else(|| {
        warn!(fact, "fact unavailable");
        UNKNOWN.to_string()
    })
}

/// `$USER`, else `$USERNAME`, else empty.
pub fn user_from(user: Option<String>, username: Option<String>) -> String {
    user.filter(|u| !u.is_empty())
        .or(username)
        .unwrap_or_default()
}

/// Last path component of the login shell.
pub fn shell_name(shell: Option<&str>) -> String {
    match shell.filter(|s| !s.is_empty()) {
        Some(shell) => shell.rsplit('/').next().unwrap_or(shell).to_string(),
        None => UNKNOWN.to_string(),
    }
}

fn os_name() -> String {
    fs::read_to_string("/etc/os-release")
        .ok()
        .and_then(|contents| parse_os_release(&contents))
        .or_else(System::name)
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

/// `PRETTY_NAME` from an os-release file, quotes stripped.
pub fn parse_os_release(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim_matches('"').to_string())
}

/// `1d 2h 3m`; days only when non-zero, hours when days or hours are.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds / 3_600) % 24;
    let minutes = (seconds / 60) % 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{hours}h"));
    }
    parts.push(format!("{minutes}m"));
    parts.join(" ")
}

/// Installed package count from the first package manager that answers.
fn count_packages() -> Option<String> {
    const MANAGERS: &[(&str, &[&str])] = &[
        ("pacman", &["-Qq"]),
        ("dpkg-query", &["-f", ".\n", "-W"]),
        ("rpm", &["-qa"]),
    ];

    MANAGERS.iter().find_map(|(program, args)| {
        let output = Command::new(program).args(*args).output().ok()?;
        if !output.status.success() {
            debug!(program, status = %output.status, "package manager failed");
            return None;
        }
        let count = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count();
        Some(count.to_string())
    })
}

/// Memory figures in KiB from `/proc/meminfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    pub total: u64,
    pub used: u64,
}

impl MemInfo {
    /// `used = MemTotal - (MemFree + Buffers + Cached)`. `None` without `MemTotal`.
    pub fn parse(contents: &str) -> Option<Self> {
        let (mut total, mut free, mut buffers, mut cached) = (None, 0u64, 0u64, 0u64);

        for line in contents.lines() {
            let mut fields = line.split_whitespace();
            let (Some(key), Some(value)) = (fields.next(), fields.next()) else {
                continue;
            };
            let value = value.parse::<u64>().unwrap_or(0);
            match key {
                "MemTotal:" => total = Some(value),
                "MemFree:" => free = value,
                "Buffers:" => buffers = value,
                "Cached:" => cached = value,
                _ => {}
            }
        }

        let total = total?;
        Some(Self {
            total,
            used: total.saturating_sub(free + buffers + cached),
        })
    }
}

impl std::fmt::Display for MemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} MiB", self.used / 1024, self.total / 1024)
    }
}

fn memory() -> Option<String> {
    let contents = fs::read_to_string("/proc/meminfo").ok()?;
    MemInfo::parse(&contents).map(|m| m.to_string())
}

/// Eight background-colored cells.
pub fn swatch(mode: ColorMode) -> String {
    const ORDER: [NamedColor; 8] = [
        NamedColor::White,
        NamedColor::Red,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Cyan,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Black,
    ];

    ORDER
        .iter()
        .map(|&color| match mode {
            ColorMode::Ansi => Paint::background(color).paint(" "),
            ColorMode::Mono => " ".to_string(),
        })
        .collect()
}

/// Run `script` with `sh -c`, returning stdout and stderr with trailing
/// whitespace trimmed.
pub fn run_command(script: &str) -> Result<String, FactError> {
    debug!(script, "running command module");

    let output = Command::new("sh")
        .arg("-c")
        .arg(script)
        .output()
        .map_err(|source| FactError::Spawn {
            script: script.to_string(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    let combined = combined.trim_end().to_string();

    if !output.status.success() {
        return Err(FactError::Failed {
            script: script.to_string(),
            status: output.status.to_string(),
            output: combined,
        });
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from() {
        assert_eq!(user_from(Some("alice".into()), Some("bob".into())), "alice");
        assert_eq!(user_from(None, Some("bob".into())), "bob");
        assert_eq!(user_from(Some(String::new()), Some("bob".into())), "bob");
        assert_eq!(user_from(None, None), "");
    }

    #[test]
    fn test_shell_name() {
        assert_eq!(shell_name(Some("/usr/bin/zsh")), "zsh");
        assert_eq!(shell_name(Some("fish")), "fish");
        assert_eq!(shell_name(Some("")), "unknown");
        assert_eq!(shell_name(None), "unknown");
    }

    #[test]
    fn test_parse_os_release() {
        let contents = "NAME=\"Arch Linux\"\nPRETTY_NAME=\"Arch Linux\"\nID=arch\n";
        assert_eq!(parse_os_release(contents).as_deref(), Some("Arch Linux"));
        assert_eq!(
            parse_os_release("PRETTY_NAME=Void\n").as_deref(),
            Some("Void")
        );
        assert_eq!(parse_os_release("ID=arch\n"), None);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(5 * 60), "5m");
        assert_eq!(format_uptime(3 * 3600 + 7 * 60), "3h 7m");
        assert_eq!(format_uptime(86_400), "1d 0h 0m");
        assert_eq!(format_uptime(2 * 86_400 + 5 * 3600 + 42 * 60 + 30), "2d 5h 42m");
    }

    #[test]
    fn test_meminfo_parse() {
        let contents = "MemTotal:       16384000 kB\n\
                        MemFree:         4096000 kB\n\
                        MemAvailable:    8192000 kB\n\
                        Buffers:          512000 kB\n\
                        Cached:          2048000 kB\n";
        let mem = MemInfo::parse(contents).unwrap();
        assert_eq!(mem.total, 16_384_000);
        assert_eq!(mem.used, 16_384_000 - (4_096_000 + 512_000 + 2_048_000));
        assert_eq!(mem.to_string(), "9500 | 16000 MiB");
    }

    #[test]
    fn test_meminfo_without_total() {
        assert_eq!(MemInfo::parse("MemFree: 10 kB\n"), None);
        assert_eq!(MemInfo::parse(""), None);
    }

    #[test]
    fn test_swatch() {
        assert_eq!(swatch(ColorMode::Mono), " ".repeat(8));
        let colored = swatch(ColorMode::Ansi);
        assert_eq!(colored.matches("\x1b[48;5;").count(), 8);
        assert_eq!(colored.matches(' ').count(), 8);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_trims_output() {
        assert_eq!(run_command("printf 'hello\\n\\n'").unwrap(), "hello");
        assert_eq!(run_command("echo out; echo err >&2").unwrap(), "out\nerr");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_failure() {
        let err = run_command("echo nope; exit 3").unwrap_err();
        match err {
            FactError::Failed { script, output, .. } => {
                assert_eq!(script, "echo nope; exit 3");
                assert_eq!(output, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_facts_command_row() {
        let facts = SystemFacts::new(ColorMode::Mono);
        assert_eq!(facts.collect(&Row::command("echo 42")).unwrap(), "42");
        assert!(facts.collect(&Row::command("false")).is_err());
    }

    #[test]
    fn test_command_row_without_script() {
        let facts = SystemFacts::new(ColorMode::Mono);
        let err = facts.collect(&Row::new(ModuleKind::Command)).unwrap_err();
        assert!(matches!(err, FactError::MissingScript));
    }

    #[test]
    fn test_builtin_collectors_never_fail() {
        let facts = SystemFacts::new(ColorMode::Mono);
        for kind in ModuleKind::all().iter().filter(|k| **k != ModuleKind::Command) {
            let info = facts.collect(&Row::new(*kind)).unwrap();
            assert!(!info.contains('\n'), "{kind} returned a multi-line value");
        }
    }

    #[test]
    fn test_closure_fact_source() {
        let source = |row: &Row| Ok::<_, FactError>(format!("<{}>", row.label()));
        assert_eq!(source.collect(&Row::new(ModuleKind::Os)).unwrap(), "<os>");
    }
}
