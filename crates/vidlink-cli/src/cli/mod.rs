//! CLI for the vidlink video link resolver.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use vidlink_core::config::{self, OutputFormat};
use vidlink_core::video::Provider;

use commands::{run_batch, run_check, run_completions, run_resolve};

/// Top-level CLI for vidlink.
#[derive(Debug, Parser)]
#[command(name = "vidlink")]
#[command(about = "vidlink: turn pasted video links into embeddable player URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// `--format` values; mirrors the config file's `output_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more links and print their descriptors.
    Resolve {
        /// Links to resolve (quote them in the shell).
        #[arg(required = true, value_name = "LINK")]
        links: Vec<String>,
        /// Output format; defaults to `output_format` from config.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Resolve links read from a file, one per line (`-` for stdin).
    Batch {
        /// Path to the link list, or `-` to read stdin.
        path: String,
        /// Output format; defaults to `output_format` from config.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Exit successfully only if the link resolves to the given provider.
    Check {
        /// Link to check.
        link: String,
        /// Expected provider: file, youtube, vimeo, loom, gdrive or unknown.
        #[arg(long)]
        provider: Provider,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    /// Parses arguments and runs the command.
    ///
    /// `Ok(false)` means the command ran but should exit with a failure status
    /// (unresolved links, provider mismatch).
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(true);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let ok = match cli.command {
            CliCommand::Resolve { links, format } => {
                let format = format.map_or(cfg.output_format, OutputFormat::from);
                run_resolve(&links, format, cfg.fail_on_unresolved)?
            }
            CliCommand::Batch { path, format } => {
                let format = format.map_or(cfg.output_format, OutputFormat::from);
                run_batch(&path, format, cfg.fail_on_unresolved).await?
            }
            CliCommand::Check { link, provider } => run_check(&link, provider),
            CliCommand::Completions { .. } => true,
        };

        Ok(ok)
    }
}

#[cfg(test)]
mod tests;
