//! `wsc generate` – render README from the catalog and template.

use anyhow::Result;
use std::path::PathBuf;
use wsc_core::config::WscConfig;
use wsc_core::generate::{generate, GeneratePaths};
use wsc_core::url_label::LabelRules;

pub fn run_generate(
    cfg: &WscConfig,
    projects: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let paths = resolve_paths(cfg, projects, template, output);
    let rules = LabelRules::with_host_labels(&cfg.host_labels);
    let count = generate(&paths, &rules)?;
    println!("Wrote {} ({count} projects)", paths.output.display());
    Ok(())
}

/// Paths from config, each overridden by its flag if given.
pub(crate) fn resolve_paths(
    cfg: &WscConfig,
    projects: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
) -> GeneratePaths {
    let defaults = GeneratePaths::from_config(cfg);
    GeneratePaths {
        projects: projects.unwrap_or(defaults.projects),
        template: template.unwrap_or(defaults.template),
        output: output.unwrap_or(defaults.output),
    }
}
