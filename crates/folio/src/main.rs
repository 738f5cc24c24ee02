//! folio CLI - Rich text rendering for CMS content.
//!
//! Provides commands for:
//! - `render`: Render a rich text field to HTML
//! - `text`: Extract plain text (optionally as an excerpt)
//! - `classify`: Report the shape of a field value

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ClassifyArgs, RenderArgs, TextArgs};
use output::Output;

/// folio - Rich text rendering for CMS content.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output (show rendering diagnostics at info level).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a field value to HTML.
    Render(RenderArgs),
    /// Extract plain text from a field value.
    Text(TextArgs),
    /// Print the content shape of a field value.
    Classify(ClassifyArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Text(args) => args.execute(&output),
        Commands::Classify(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
