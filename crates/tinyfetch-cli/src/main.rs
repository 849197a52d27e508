//! tinyfetch - system information in a colored box.
//!
//! Usage:
//!   tinyfetch                      # ~/.config/tinyfetch/config.yml or defaults
//!   tinyfetch --config my.yml      # explicit configuration file
//!   tinyfetch --dump-config        # print a starter configuration

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tinyfetch_core::Config;
use tinyfetch_terminal::{print_title, BoxRenderer, ColorMode, RenderError, SystemFacts};
use tinyfetch_yaml::Manifest;
use tracing::{debug, error};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tinyfetch", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (YAML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colors (use plain text)
    #[arg(long)]
    no_color: bool,

    /// Log level for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    log_level: String,

    /// Dump default configuration to stdout and exit
    #[arg(long)]
    dump_config: bool,
}

impl Cli {
    fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::Mono
        } else {
            ColorMode::detect()
        }
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn run<W: Write>(out: &mut W, config: &Config, mode: ColorMode) -> Result<(), RenderError> {
    if let Some(title) = &config.title {
        print_title(out, title, mode)?;
    }

    BoxRenderer::new(&config.geometry, mode).render(out, &config.rows, &SystemFacts::new(mode))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", Manifest::default_yaml());
        return ExitCode::SUCCESS;
    }

    setup_logging(&cli.log_level);

    let config = match tinyfetch_yaml::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mode = cli.color_mode();
    debug!(?mode, rows = config.rows.len(), "rendering");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&mut out, &config, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // rows already written stay on screen
            let _ = out.flush();
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
