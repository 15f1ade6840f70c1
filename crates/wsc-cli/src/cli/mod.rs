//! CLI for the whitespace corpus catalog tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wsc_core::config;

use commands::{run_generate, run_licenses};

/// Top-level CLI for the catalog tools.
#[derive(Debug, Parser)]
#[command(name = "wsc")]
#[command(about = "Whitespace corpus catalog: README table generation and license lookup", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render the project table into the README template.
    Generate {
        /// Project catalog (JSON array). Defaults to `projects_file` from config.
        #[arg(long, value_name = "PATH")]
        projects: Option<PathBuf>,
        /// README template. Defaults to `template_file` from config.
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,
        /// Generated document, overwritten. Defaults to `output_file` from config.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Look up missing licenses on GitHub and print the updated catalog to stdout.
    Licenses {
        /// Project catalog (JSON array). Defaults to `projects_file` from config.
        #[arg(long, value_name = "PATH")]
        projects: Option<PathBuf>,
    },
}

impl CliCommand {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CliCommand::Generate { .. } => "generate",
            CliCommand::Licenses { .. } => "licenses",
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Generate {
                projects,
                template,
                output,
            } => run_generate(&cfg, projects, template, output)?,
            CliCommand::Licenses { projects } => run_licenses(&cfg, projects)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
