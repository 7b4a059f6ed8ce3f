//! # CLI Layer
//!
//! The CLI is the only place that touches stdin, stdout, stderr and the
//! process environment. It:
//!
//! 1. Parses process arguments (`setup.rs`)
//! 2. Sets up logging and loads the config file
//! 3. Runs the read-eval-print loop, feeding each line to [`PhonebookApi`]
//! 4. Renders every `CmdResult` (`render.rs`)
//!
//! The loop ends on `close`/`exit` or end of input.

use super::render::Renderer;
use super::setup::Cli;
use clap::Parser;
use phonebook::api::PhonebookApi;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PHONEBOOK_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.clone());
    let color = !cli.no_color && io::stdout().is_terminal();
    let renderer = Renderer::new(cli.output, color);
    let mut api = PhonebookApi::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut api,
        &config,
        &renderer,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the config file, falling back to defaults when it cannot be used.
fn load_config(explicit: Option<PathBuf>) -> PhonebookConfig {
    let Some(path) = explicit.or_else(PhonebookConfig::default_path) else {
        debug!("no config directory available, using defaults");
        return PhonebookConfig::default();
    };

    match PhonebookConfig::load(&path) {
        Ok(config) => {
            info!(path = %path.display(), "config loaded");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unusable config file");
            PhonebookConfig::default()
        }
    }
}

pub(super) fn run_session<R: BufRead, W: Write>(
    api: &mut PhonebookApi,
    config: &PhonebookConfig,
    renderer: &Renderer,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", config.greeting)?;
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(out)?;
            break;
        }

        // Bytes that are not UTF-8 become U+FFFD and fail like any other bad input.
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("input line was not valid UTF-8");
        }

        let result = api.execute(&line);
        renderer.render(out, &result)?;
        if result.exit {
            break;
        }
    }

    info!(records = api.book().len(), "session ended");
    Ok(())
}
