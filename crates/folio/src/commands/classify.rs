//! `folio classify` command implementation.

use clap::Args;
use folio_richtext::Content;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the classify command.
#[derive(Args)]
pub(crate) struct ClassifyArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl ClassifyArgs {
    /// Execute the classify command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let value = self.input.read()?;
        let content = Content::classify(&value);

        if matches!(content, Content::Unrecognized(_)) {
            output.warning("Value is not rich text; it renders as its string form");
        }
        output.result(content.name());
        Ok(())
    }
}
