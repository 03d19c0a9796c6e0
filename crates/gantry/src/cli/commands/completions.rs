//! Shell completions

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::{output, Cli};

/// Print a completion script for gantry
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");

        match self.output {
            Some(ref path) => {
                write_script(self.shell, &mut std::fs::File::create(path)?);
                if !cli.quiet {
                    output::success(&format!("Completions written to {}", path.display()));
                }
            }
            None => write_script(self.shell, &mut io::stdout()),
        }

        Ok(())
    }
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), "gantry", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;

    #[test]
    fn test_script_lists_subcommands() {
        let mut buf = Vec::new();
        write_script(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("gantry"));
        assert!(script.contains("changelog"));
        assert!(script.contains("commits"));
    }

    #[test]
    fn test_writes_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_gantry");
        let cli = Cli::parse_from([
            "gantry",
            "--quiet",
            "completions",
            "zsh",
            "--output",
            path.to_str().unwrap(),
        ]);

        match cli.command {
            Commands::Completions(ref cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
                cmd.execute(&cli).unwrap();
            }
            ref other => panic!("unexpected command: {:?}", other),
        }

        let script = std::fs::read_to_string(&path).unwrap();
        assert!(script.contains("#compdef gantry"));
    }
}
