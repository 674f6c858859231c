//! Callout CLI - transform GitHub-style callouts in a markdown file.
//!
//! Reads a markdown file (default `tests/sample.md`), rewrites `[!TYPE]`
//! blockquotes into HTML callout markup and prints the result to stdout.
//! Exits non-zero with a diagnostic on stderr when the file is missing or
//! unreadable.

mod error;
mod output;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use callout_config::{CliSettings, Config};
use callout_core::CalloutTransformer;
use callout_renderer::MarkdownBody;
use error::CliError;
use output::Output;

/// Default input path when no file argument is given.
const DEFAULT_INPUT: &str = "tests/sample.md";

/// Transform GitHub-style callouts in markdown to HTML.
#[derive(Parser)]
#[command(name = "callout", version, about)]
struct Cli {
    /// Markdown file to transform.
    #[arg(default_value = DEFAULT_INPUT)]
    file: PathBuf,

    /// CSS class prefix for callout elements.
    #[arg(long)]
    prefix: Option<String>,

    /// Disable the icon/label header fragment.
    #[arg(long)]
    no_header: bool,

    /// Wrapper tag: div or blockquote.
    #[arg(long)]
    wrapper: Option<String>,

    /// Explicit config file path (skips callout.toml discovery).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = CliSettings {
        class_prefix: cli.prefix.clone(),
        render_header: cli.no_header.then_some(false),
        wrapper: cli.wrapper.clone(),
    };
    let config = Config::load(cli.config.as_deref(), Some(&settings))?;

    if !cli.file.is_file() {
        return Err(CliError::FileNotFound(cli.file.clone()));
    }
    let text = std::fs::read_to_string(&cli.file).map_err(|source| CliError::Read {
        path: cli.file.clone(),
        source,
    })?;

    let body = MarkdownBody::new();
    let html = CalloutTransformer::with_options(&config.into_options())
        .with_body_renderer(&body)
        .transform(&text);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{html}")?;

    Ok(())
}
