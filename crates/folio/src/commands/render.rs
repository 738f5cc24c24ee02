//! `folio render` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_richtext::HtmlBackend;
use serde_json::Value;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Class for the root wrapper element (overrides config).
    #[arg(long)]
    class: Option<String>,

    /// Maximum nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            max_depth: self.max_depth,
            root_class: self.class,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let value = self.input.read()?;

        output.result(&render_html(&config, &value)?);
        Ok(())
    }
}

/// Render a field value to HTML, logging diagnostics.
fn render_html(config: &Config, value: &Value) -> Result<String, CliError> {
    let backend = HtmlBackend::new().with_classes(config.class_map()?);
    let result = config.renderer().render(value);
    result.log_warnings();
    tracing::info!(
        nodes = result.nodes.len(),
        warnings = result.warnings.len(),
        "Rendered field"
    );
    Ok(result.render_with(&backend))
}
