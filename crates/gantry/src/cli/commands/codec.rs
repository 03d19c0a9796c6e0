//! URL encode/decode commands

use clap::Args;
use console::style;
use tracing::info;

use crate::cli::Cli;
use crate::clipboard::{transcode, SystemClipboard};
use crate::codec::Direction;

/// Encode or decode text through the clipboard
#[derive(Debug, Args)]
pub struct CodecCommand {
    /// Text to process (default: current clipboard contents)
    pub text: Option<String>,
}

impl CodecCommand {
    /// Execute the encode or decode command
    pub fn execute(&self, cli: &Cli, direction: Direction) -> anyhow::Result<()> {
        info!(direction = ?direction, from_clipboard = self.text.is_none(), "executing codec command");
        let mut clipboard = SystemClipboard::new()?;
        let result = transcode(direction, self.text.as_deref(), &mut clipboard)?;

        if cli.quiet {
            println!("{}", result.output);
            return Ok(());
        }

        println!("{}: {}", direction.verb(), style(&result.input).dim());
        println!("{} copied to clipboard 💫", style(&result.output).cyan());
        Ok(())
    }
}
