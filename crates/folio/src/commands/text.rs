//! `folio text` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_richtext::excerpt;
use serde_json::Value;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the text command.
#[derive(Args)]
pub(crate) struct TextArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Include non-node array entries (strings, numbers) in the output.
    #[arg(long)]
    safe: bool,

    /// Truncate to an excerpt (`--excerpt=N` sets the length, default from config).
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    excerpt: Option<Option<usize>>,
}

impl TextArgs {
    /// Execute the text command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            excerpt_chars: self.excerpt.flatten(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let value = self.input.read()?;

        output.result(&extract_text(
            &config,
            &value,
            self.safe,
            self.excerpt.is_some(),
        ));
        Ok(())
    }
}

fn extract_text(config: &Config, value: &Value, safe: bool, truncate: bool) -> String {
    let extractor = config.extractor();
    let text = if safe {
        extractor.safe_content(value)
    } else {
        extractor.extract(value)
    };
    if truncate {
        excerpt(&text, config.excerpt.max_chars).into_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_extract_text() {
        let value = json!([{ "text": "Hello " }, { "text": "World", "bold": true }]);
        assert_eq!(
            extract_text(&Config::default(), &value, false, false),
            "Hello World"
        );
    }

    #[test]
    fn test_extract_text_safe() {
        let value = json!(["Since ", 2019]);
        let config = Config::default();
        assert_eq!(extract_text(&config, &value, true, false), "Since 2019");
        assert_eq!(extract_text(&config, &value, false, false), "");
    }

    #[test]
    fn test_extract_text_excerpt() {
        let mut config = Config::default();
        config.excerpt.max_chars = 5;
        let value = json!("A wonderful day");
        assert_eq!(extract_text(&config, &value, false, true), "A won...");
        assert_eq!(
            extract_text(&config, &value, false, false),
            "A wonderful day"
        );
    }

    #[derive(clap::Parser)]
    struct TextCli {
        #[command(flatten)]
        args: TextArgs,
    }

    fn parse(args: &[&str]) -> TextArgs {
        use clap::Parser;
        TextCli::try_parse_from(std::iter::once("folio-text").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_excerpt_flag_before_input() {
        let args = parse(&["--excerpt", "field.json"]);
        assert_eq!(args.excerpt, Some(None));
    }

    #[test]
    fn test_excerpt_flag_after_input() {
        let args = parse(&["field.json", "--excerpt"]);
        assert_eq!(args.excerpt, Some(None));
    }

    #[test]
    fn test_excerpt_with_length() {
        let args = parse(&["--excerpt=50", "field.json"]);
        assert_eq!(args.excerpt, Some(Some(50)));
        assert_eq!(parse(&["field.json"]).excerpt, None);
    }
}
